//! Countries outside Europe: the Caucasus, the Middle East, Africa and Latin America

use super::rules::{RegionTable, first_present};
use super::{Resolution, Resolver};
use crate::app::models::{EntryRecord, RegionCatalog};
use std::sync::LazyLock;

pub(super) const RESOLVERS: &[(&str, Resolver)] = &[
    ("AM", am),
    ("BH", bh),
    ("BR", br),
    ("EG2", eg2),
    ("GE", ge),
    ("MA", ma),
    ("MA2", ma2),
    ("MX", mx),
    ("TN2", tn2),
];

static AM_PROVINCES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Aragatsotn Province", "AG"),
        ("Արագածոտն", "AG"),
        ("Ararat Province", "AR"),
        ("Bardzrashen", "AR"),
        ("Արարատ", "AR"),
        ("Armavir Province", "AV"),
        ("Gegharkunik Province", "GR"),
        ("Kotayk Province", "KT"),
        ("Lori Province", "LO"),
        ("Շիրակ", "SH"),
        ("Shirak Province", "SH"),
        ("Syunik Province", "SU"),
        ("Tavush Province", "TV"),
        ("Voskepar", "TV"),
        ("Vayots Dzor Province", "VD"),
        ("Jermuk", "VD"),
        ("Yerevan", "ER"),
        ("Երևան", "ER"),
    ])
});

pub(super) fn am(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    let name = first_present(&[
        entry.admin_name_1.as_deref(),
        entry.municipality.as_deref(),
    ]);
    AM_PROVINCES.resolve(entry, name)
}

static BH_GOVERNORATES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Capital", "13"),
        ("Southern", "14"),
        ("Muharraq", "15"),
        ("Northern", "17"),
    ])
});

pub(super) fn bh(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    BH_GOVERNORATES.resolve(entry, entry.admin_name_1.as_deref())
}

static BR_STATES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Acre", "AC"),
        ("Alagoas", "AL"),
        ("Amapa", "AP"),
        ("Amazonas", "AM"),
        ("Bahia", "BA"),
        ("Ceara", "CE"),
        ("Distrito Federal", "DF"),
        ("Espirito Santo", "ES"),
        ("Goias", "GO"),
        ("Mato Grosso", "MT"),
        ("Mato Grosso do Sul", "MS"),
        ("Maranhao", "MA"),
        ("Minas Gerais", "MG"),
        ("Para", "PA"),
        ("Paraiba", "PB"),
        ("Parana", "PR"),
        ("Piaui", "PI"),
        ("Rio de Janeiro", "RJ"),
        ("Rio Grande do Norte", "RN"),
        ("Rio Grande do Sul", "RS"),
        ("Rondonia", "RO"),
        ("Roraima", "RR"),
        ("Santa Catarina", "SC"),
        ("Sao Paulo", "SP"),
        ("Sergipe", "SE"),
        ("Pernambuco", "PE"),
        ("Tocantins", "TO"),
    ])
});

pub(super) fn br(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    BR_STATES.resolve(entry, entry.admin_name_1.as_deref())
}

static EG_GOVERNORATES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Damietta", "DT"),
        ("Alexandria", "ALX"),
        ("Cairo", "C"),
        ("Al Sharqia", "SHR"),
        ("Dakahlia", "DK"),
        ("Faiyum", "FYM"),
        ("Beni Suef", "BNS"),
        ("Beheira", "BH"),
        ("Aswan", "ASN"),
        ("Asyut", "AST"),
        ("Luxor", "LX"),
        ("Kafr El-Sheikh", "KFS"),
        ("Matrouh", "MT"),
        ("Giza", "GZ"),
        ("Monufia", "MNF"),
        ("Minya", "MN"),
        ("Gharbia", "GH"),
        ("New Valley", "WAD"),
        ("North Sinai", "SIN"),
        ("Ismailia", "IS"),
        ("Port Said", "PTS"),
        ("Suez", "SUZ"),
        ("Qalyubia", "KB"),
        ("South Sinai", "JS"),
        ("Sohag", "SHG"),
        ("Qena", "KN"),
        ("Red Sea", "BA"),
    ])
});

pub(super) fn eg2(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    EG_GOVERNORATES.resolve(entry, entry.admin_name_1.as_deref())
}

static GE_REGIONS: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Abkhazia", "AB"),
        ("Adjara", "AJ"),
        ("Guria", "GU"),
        ("Imereti", "IM"),
        ("K'Akheti", "KA"),
        ("Kvemo Kartli", "KK"),
        ("Mtskheta-Mtianeti", "MM"),
        ("Rach'A-Lechkhumi-Kvemo Svaneti", "RL"),
        ("Samegrelo-Zemo Svaneti", "SZ"),
        ("Samtskhe-Javakheti", "SJ"),
        ("Shida Kartli", "SK"),
        ("Tbilisi", "TB"),
    ])
});

pub(super) fn ge(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    GE_REGIONS.resolve(entry, entry.admin_name_1.as_deref())
}

static MA_REGIONS: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Casablanca-Settat", "06"),
        ("Béni Mellal-Khénifra", "05"),
        ("Béni Mellal-Khenifra", "05"),
        ("Marrakech-Safi", "07"),
        ("Marrakesh-Safi", "07"),
        ("Fez-Meknès", "03"),
        ("Fès-Meknès", "03"),
        ("Rabat-Salé-Kénitra", "04"),
        ("Guelmim-Oued Noun", "10"),
        ("Oriental", "02"),
        ("Laâyoune-Sakia El Hamra", "11"),
        ("Drâa-Tafilalet", "08"),
        ("Souss Massa", "09"),
        ("Souss-Massa", "09"),
        ("Tanger-Tétouan-Al Hoceïma", "01"),
        ("Tangier-Tétouan-Al Hoceima", "01"),
    ])
});

pub(super) fn ma(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    match entry.admin_name_1.as_deref() {
        Some(name) => MA_REGIONS.resolve(entry, Some(name)),
        None => Resolution::NoRegion,
    }
}

/// Province names to ISO province codes
static MA_PROVINCES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Al Hoceima", "HOC"),
        ("Assa Zag", "ASZ"),
        ("Boujdour", "BOD"),
        ("Al Haouz", "HAO"),
        ("Aousserd", "AOU"),
        ("Agadir Ida Ou Tanan", "AGD"),
        ("Beni Mellal", "BEM"),
        ("Benslimane", "BES"),
        ("Azilal", "AZI"),
        ("Berkane", "BER"),
        ("Chefchaouen", "CHE"),
        ("El Hajeb", "HAJ"),
        ("El Jadida", "JDI"),
        ("Essaouira", "ESI"),
        ("Boulemane", "BOM"),
        ("Chichaoua", "CHI"),
        ("Chtouka Ait Baha", "CHT"),
        ("El Kelaa Des Sraghna", "KES"),
        ("Errachidia", "ERR"),
        ("Es Semara", "ESM"),
        ("Khenifra", "KEN"),
        ("Ifrane", "IFR"),
        ("Khemisset", "KHE"),
        ("Jerada", "JRA"),
        ("Fahs Anjra", "FAH"),
        ("Figuig", "FIG"),
        ("Fes", "FES"),
        ("Guelmim", "GUE"),
        ("Inezgane Ait Melloul", "INE"),
        ("Kenitra", "KEN"),
        ("Laayoune", "LAA"),
        ("Larache", "LAR"),
        ("Meknes", "MEK"),
        ("Khouribga", "KHO"),
        ("Mohammedia", "MOH"),
        ("Mediouna", "MED"),
        ("Nador", "NAD"),
        ("Nouaceur", "NOU"),
        ("Moulay Yacoub", "MOU"),
        ("Marrakech", "MAR"),
        ("Sidi Kacem", "SIK"),
        ("Tanger Assilah", "TNG"),
        ("Oujda Angad", "OUJ"),
        ("Ouarzazate", "OUA"),
        ("Settat", "SET"),
        ("Skhirate-Temara", "SKH"),
        ("Sale", "SAL"),
        ("Oued Ed-Dahab", "OUD"),
        ("Sefrou", "SEF"),
        ("Taounate", "TAO"),
        ("Tantan", "TNT"),
        ("Taourirt", "TAI"),
        ("Taza", "TAZ"),
        ("Zagora", "ZAG"),
        ("Tiznit", "TIZ"),
        ("Taroudannt", "TAR"),
        ("Tata", "TAT"),
        ("Tetouan", "TET"),
    ])
});

/// Provinces are reported by the source; the region is the province's ISO parent
pub(super) fn ma2(entry: &EntryRecord, catalog: &RegionCatalog) -> Resolution {
    let province = entry.admin_name_1.as_deref();
    let Some(province_code) = province.and_then(|p| MA_PROVINCES.get(p)) else {
        return Resolution::unknown(entry, province);
    };

    catalog
        .region(&entry.country_code, province_code)
        .and_then(|subdivision| subdivision.parent.as_deref())
        .and_then(|parent| parent.split_once('-'))
        .map(|(_, region)| Resolution::code(region))
        .unwrap_or_else(|| Resolution::unknown(entry, province))
}

static MX_STATES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Aguascalientes", "AGU"),
        ("Baja California", "BCN"),
        ("Baja California Sur", "BCS"),
        ("Campeche", "CAM"),
        ("Chiapas", "CHP"),
        ("Chihuahua", "CHH"),
        ("Coahuila de Zaragoza", "COA"),
        ("Colima", "COL"),
        ("Distrito Federal", "CMX"),
        ("Durango", "DUR"),
        ("Guanajuato", "GUA"),
        ("Guerrero", "GRO"),
        ("Hidalgo", "HID"),
        ("Jalisco", "JAL"),
        ("México", "MEX"),
        ("Michoacán de Ocampo", "MIC"),
        ("Morelos", "MOR"),
        ("Nayarit", "NAY"),
        ("Nuevo León", "NLE"),
        ("Oaxaca", "OAX"),
        ("Puebla", "PUE"),
        ("Querétaro", "QUE"),
        ("Quintana Roo", "ROO"),
        ("San Luis Potosí", "SLP"),
        ("Sinaloa", "SIN"),
        ("Sonora", "SON"),
        ("Tabasco", "TAB"),
        ("Tamaulipas", "TAM"),
        ("Tlaxcala", "TLA"),
        ("Veracruz de Ignacio de la Llave", "VER"),
        ("Yucatán", "YUC"),
        ("Zacatecas", "ZAC"),
    ])
});

pub(super) fn mx(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    MX_STATES.resolve(entry, entry.admin_name_1.as_deref())
}

static TN_GOVERNORATES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Ariana", "12"),
        ("Ben Arous", "13"),
        ("Kebili", "73"),
        ("Beja", "31"),
        ("Bizerte", "23"),
        ("Jendouba", "32"),
        ("Gafsa", "71"),
        ("Kasserine", "42"),
        ("Kairouan", "41"),
        ("Gabes", "81"),
        ("Sfax", "61"),
        ("Sousse", "51"),
        ("Manouba", "14"),
        ("Mahdia", "53"),
        ("Nabeul", "21"),
        ("Sidi Bouzid", "43"),
        ("Siliana", "34"),
        ("Monastir", "52"),
        ("Medenine", "82"),
        ("Le Kef", "33"),
        ("Tunis", "11"),
        ("Zaghouan", "22"),
        ("Tataouine", "83"),
        ("Tozeur", "72"),
    ])
});

pub(super) fn tn2(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    TN_GOVERNORATES.resolve(entry, entry.admin_name_1.as_deref())
}
