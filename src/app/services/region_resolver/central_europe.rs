//! Central Europe and the Baltics

use super::rules::{RegionTable, passthrough};
use super::{Resolution, Resolver};
use crate::app::models::{EntryRecord, RegionCatalog};
use std::sync::LazyLock;

pub(super) const RESOLVERS: &[(&str, Resolver)] = &[
    ("BG", bg),
    ("CZ", cz),
    ("EE", ee),
    ("HR", hr),
    ("HU", hu),
    ("LT", lt),
    ("LV", lv),
    ("PL", pl),
    ("RO", ro),
];

/// GeoNames three-letter province codes to ISO numbers
static BG_PROVINCES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("BLG", "01"),
        ("BGS", "02"),
        ("VAR", "03"),
        ("VTR", "04"),
        ("VID", "05"),
        ("VRC", "06"),
        ("GAB", "07"),
        ("DOB", "08"),
        ("KRZ", "09"),
        ("KNL", "10"),
        ("LOV", "11"),
        ("MON", "12"),
        ("PAZ", "13"),
        ("PER", "14"),
        ("PVN", "15"),
        ("PDV", "16"),
        ("RAZ", "17"),
        ("RSE", "18"),
        ("SLS", "19"),
        ("SLV", "20"),
        ("SML", "21"),
        ("SOF", "22"),
        ("SFO", "23"),
        ("SZR", "24"),
        ("TGV", "25"),
        ("HKV", "26"),
        ("SHU", "27"),
        ("JAM", "28"),
    ])
});

pub(super) fn bg(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    BG_PROVINCES.resolve(entry, entry.admin_code_1.as_deref())
}

static CZ_REGIONS: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Hlavní město Praha", "10"),
        ("Středočeský kraj", "20"),
        ("Jihočeský kraj", "31"),
        ("Plzeňský kraj", "32"),
        ("Karlovarský kraj", "41"),
        ("Ústecký kraj", "42"),
        ("Liberecký kraj", "51"),
        ("Královéhradecký kraj", "52"),
        ("Pardubický kraj", "53"),
        ("Kraj Vysočina", "63"),
        ("Jihomoravský kraj", "64"),
        ("Olomoucký kraj", "71"),
        ("Zlínský kraj", "72"),
        ("Moravskoslezský kraj", "80"),
    ])
});

pub(super) fn cz(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    CZ_REGIONS.resolve(entry, entry.admin_name_1.as_deref())
}

static EE_COUNTIES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Harju maakond", "37"),
        ("Hiiu maakond", "39"),
        ("Ida-Viru maakond", "45"),
        ("Jõgeva maakond", "50"),
        ("Järva maakond", "52"),
        ("Lääne maakond", "56"),
        ("Lääne-Viru maakond", "60"),
        ("Põlva maakond", "64"),
        ("Pärnu maakond", "68"),
        ("Rapla maakond", "71"),
        ("Saare maakond", "74"),
        ("Tartu maakond", "79"),
        ("Valga maakond", "81"),
        ("Viljandi maakond", "84"),
        ("Võru maakond", "87"),
    ])
});

pub(super) fn ee(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    EE_COUNTIES.resolve(entry, entry.admin_name_1.as_deref())
}

static HR_COUNTIES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Zagrebačka", "01"),
        ("Krapinsko-Zagorska", "02"),
        ("Sisačko-Moslavačka", "03"),
        ("Karlovačka", "04"),
        ("Varaždinska", "05"),
        ("Koprivničko-Križevačka", "06"),
        ("Bjelovarsko-Bilogorska", "07"),
        ("Primorsko-Goranska", "08"),
        ("Ličko-Senjska", "09"),
        ("Virovitičko-Podravska", "10"),
        ("Požeško-Slavonska", "11"),
        ("Brodsko-Posavska", "12"),
        ("Zadarska", "13"),
        ("Osječko-Baranjska", "14"),
        ("Šibensko-Kninska", "15"),
        ("Vukovarsko-Srijemska", "16"),
        ("Splitsko-Dalmatinska", "17"),
        ("Istarska", "18"),
        ("Dubrovačko-Neretvanska", "19"),
        ("Međimurska", "20"),
        ("Grad Zagreb", "21"),
    ])
});

pub(super) fn hr(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    HR_COUNTIES.resolve(entry, entry.admin_name_1.as_deref())
}

/// Cities with county rights have their own subdivision
static HU_CITIES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Békéscsaba", "BC"),
        ("Debrecen", "DE"),
        ("Dunaújváros", "DU"),
        ("Eger", "EG"),
        ("Érd", "ER"),
        ("Győr", "GY"),
        ("Hódmezővásárhely", "HV"),
        ("Kaposvár", "KV"),
        ("Kecskemét", "KM"),
        ("Miskolc", "MI"),
        ("Nagykanizsa", "NK"),
        ("Nyíregyháza", "NY"),
        ("Pécs", "PS"),
        ("Salgótarján", "ST"),
        ("Sopron", "SN"),
        ("Szeged", "SD"),
        ("Székesfehérvár", "SF"),
        ("Szekszárd", "SS"),
        ("Szolnok", "SK"),
        ("Szombathely", "SH"),
        ("Tatabánya", "TB"),
        ("Veszprém", "VM"),
        ("Zalaegerszeg", "ZE"),
    ])
});

pub(super) fn hu(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    if let Some(code) = entry.municipality.as_deref().and_then(|m| HU_CITIES.get(m)) {
        return Resolution::code(code);
    }
    passthrough(entry)
}

static LT_COUNTIES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Alytus County", "AL"),
        ("Kaunas County", "KU"),
        ("Klaipėda County", "KL"),
        ("Marijampolė County", "MR"),
        ("Panevėžys", "PN"),
        ("Šiauliai County", "SA"),
        ("Tauragė County", "TA"),
        ("Telšių apskritis", "TE"),
        ("Utena County", "UT"),
        ("Vilniaus apskritis", "VL"),
    ])
});

pub(super) fn lt(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    LT_COUNTIES.resolve(entry, entry.admin_name_1.as_deref())
}

static LV_MUNICIPALITIES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Daugavpils", "DGV"),
        ("Jelgava", "JEL"),
        ("Jurmala", "JUR"),
        ("Liepaja", "LPX"),
        ("Rezekne", "REZ"),
        ("Riga", "RIX"),
        ("Ventspils", "VEN"),
        ("Aizkraukles nov.", "002"),
        ("Alūksnes nov.", "007"),
        ("Balvu nov.", "015"),
        ("Bauskas nov.", "016"),
        ("Cēsu nov.", "022"),
        ("Dobeles nov.", "026"),
        ("Gulbenes nov.", "033"),
        ("Jelgavas nov.", "041"),
        ("Jēkabpils nov.", "042"),
        ("Krāslavas nov.", "047"),
        ("Kuldīgas nov.", "050"),
        ("Limbažu nov.", "054"),
        ("Ludzas nov.", "058"),
        ("Madonas nov.", "059"),
        ("Ogres nov.", "067"),
        ("Preiļu nov.", "073"),
        ("Rēzeknes nov.", "077"),
        ("Saldus nov.", "088"),
        ("Talsu nov.", "097"),
        ("Tukuma nov.", "099"),
        ("Valkas nov.", "101"),
        ("Valmieras nov.", "113"),
        ("Valmiera", "VMR"),
        ("Ventspils nov.", "106"),
        ("Ādažu nov.", "011"),
        ("Ķekavas nov.", "052"),
        ("Līvānu nov.", "056"),
        ("Mārupes nov.", "062"),
        ("Olaines nov.", "068"),
        ("Augšdaugavas nov.", "111"),
        ("Ropažu nov.", "080"),
        ("Salaspils nov.", "087"),
        ("Saulkrastu nov.", "089"),
        ("Siguldas nov.", "091"),
        ("Smiltenes nov.", "094"),
        ("Dienvidkurzemes nov.", "112"),
        ("Varakļānu nov.", "102"),
    ])
});

pub(super) fn lv(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    LV_MUNICIPALITIES.resolve(entry, entry.admin_name_1.as_deref())
}

static PL_VOIVODESHIPS: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Lower Silesia", "02"),
        ("Kujawsko-Pomorskie", "04"),
        ("Łódź Voivodeship", "10"),
        ("Lublin", "06"),
        ("Lubusz", "08"),
        ("Lesser Poland", "12"),
        ("Mazovia", "14"),
        ("Opole Voivodeship", "16"),
        ("Subcarpathia", "18"),
        ("Podlasie", "20"),
        ("Pomerania", "22"),
        ("Silesia", "24"),
        ("Świętokrzyskie", "26"),
        ("Warmia-Masuria", "28"),
        ("Greater Poland", "30"),
        ("West Pomerania", "32"),
    ])
});

pub(super) fn pl(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    PL_VOIVODESHIPS.resolve(entry, entry.admin_name_1.as_deref())
}

static RO_COUNTIES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Alba", "AB"),
        ("Arad", "AR"),
        ("Argeş", "AG"),
        ("Bacău", "BC"),
        ("Bihor", "BH"),
        ("Bistriţa-Năsăud", "BN"),
        ("Botoşani", "BT"),
        ("Brăila", "BR"),
        ("Braşov", "BV"),
        ("Bucureşti", "B"),
        ("Buzău", "BZ"),
        ("Caraş-Severin", "CS"),
        ("Călăraşi", "CL"),
        ("Cluj", "CJ"),
        ("Constanţa", "CT"),
        ("Covasna", "CV"),
        ("Dâmboviţa", "DB"),
        ("Dolj", "DJ"),
        ("Galaţi", "GL"),
        ("Giurgiu", "GR"),
        ("Gorj", "GJ"),
        ("Harghita", "HR"),
        ("Hunedoara", "HD"),
        ("Ialomiţa", "IL"),
        ("Iaşi", "IS"),
        ("Ilfov", "IF"),
        ("Maramureş", "MM"),
        ("Mehedinţi", "MH"),
        ("Mureş", "MS"),
        ("Neamţ", "NT"),
        ("Olt", "OT"),
        ("Prahova", "PH"),
        ("Sălaj", "SJ"),
        ("Satu Mare", "SM"),
        ("Sibiu", "SB"),
        ("Suceava", "SV"),
        ("Teleorman", "TR"),
        ("Timiş", "TM"),
        ("Tulcea", "TL"),
        ("Vaslui", "VS"),
        ("Vâlcea", "VL"),
        ("Vrancea", "VN"),
    ])
});

pub(super) fn ro(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    RO_COUNTIES.resolve(entry, entry.admin_name_1.as_deref())
}
