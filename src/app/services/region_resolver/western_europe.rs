//! Western and northern Europe

use super::rules::{RegionTable, first_present};
use super::{Resolution, Resolver};
use crate::app::models::{EntryRecord, RegionCatalog};
use std::sync::LazyLock;

pub(super) const RESOLVERS: &[(&str, Resolver)] = &[
    ("AT", at),
    ("DK", dk),
    ("FI", fi),
    ("FR", fr),
    ("IT", it),
    ("LI", li),
    ("MC", mc),
    ("NL", nl),
    ("NO", no),
    ("PT", pt),
    ("SE", se),
    ("SM", sm),
];

/// Federal states, German and English names
static AT_STATES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Burgenland", "01"),
        ("Kärnten", "02"),
        ("Carinthia", "02"),
        ("Niederösterreich", "03"),
        ("Lower Austria", "03"),
        ("Oberösterreich", "04"),
        ("Upper Austria", "04"),
        ("Salzburg", "05"),
        ("Steiermark", "06"),
        ("Styria", "06"),
        ("Tirol", "07"),
        ("Tyrol", "07"),
        ("Vorarlberg", "08"),
        ("Wien", "09"),
        ("Vienna", "09"),
    ])
});

pub(super) fn at(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    AT_STATES.resolve(entry, entry.admin_name_1.as_deref())
}

static DK_REGIONS: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Region Hovedstaden", "84"),
        ("Capital Region", "84"),
        ("Region Midtjylland", "82"),
        ("Central Jutland", "82"),
        ("North Denmark", "81"),
        ("Region Nordjylland", "81"),
        ("Zealand", "85"),
        ("Region Syddanmark", "83"),
        ("South Denmark", "83"),
    ])
});

pub(super) fn dk(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    DK_REGIONS.resolve(entry, entry.admin_name_1.as_deref())
}

static FI_REGIONS: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("South Karelia", "02"),
        ("South Ostrobothnia Region", "03"),
        ("Southern Savonia", "04"),
        ("Kainuu", "05"),
        ("Kanta-Häme", "06"),
        ("Central Ostrobothnia Region", "07"),
        ("Central Finland Region", "08"),
        ("Kymenlaakso", "09"),
        ("Lapland", "10"),
        ("Pirkanmaa", "11"),
        ("Ostrobothnia Region", "12"),
        ("North Karelia", "13"),
        ("North Ostrobothnia Region", "14"),
        ("Northern Savo", "15"),
        ("Päijänne Tavastia", "16"),
        ("Satakunta", "17"),
        ("Uusimaa", "18"),
        ("Southwest Finland", "19"),
    ])
});

pub(super) fn fi(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    FI_REGIONS.resolve(entry, entry.admin_name_1.as_deref())
}

/// Regions plus the overseas collectivities reported as municipalities
static FR_REGIONS: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Auvergne-Rhône-Alpes", "ARA"),
        ("Île-de-France", "IDF"),
        ("Centre-Val de Loire", "CVL"),
        ("Bourgogne-Franche-Comté", "BFC"),
        ("Normandie", "NOR"),
        ("Hauts-de-France", "HDF"),
        ("Mondescourt", "HDF"),
        ("Grand Est", "GES"),
        ("Pays de la Loire", "PDL"),
        ("Bretagne", "BRE"),
        ("Nouvelle-Aquitaine", "NAQ"),
        ("Occitanie", "OCC"),
        ("Provence-Alpes-Côte d'Azur", "PAC"),
        ("Corse", "20R"),
        ("Clipperton Island", "CP"),
    ])
});

pub(super) fn fr(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    let name = first_present(&[
        entry.admin_name_1.as_deref(),
        entry.municipality.as_deref(),
    ]);
    FR_REGIONS.resolve(entry, name)
}

static IT_REGIONS: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Abruzzi", "65"),
        ("Basilicata", "77"),
        ("Calabria", "78"),
        ("Campania", "72"),
        ("Emilia-Romagna", "45"),
        ("Lazio", "62"),
        ("Liguria", "42"),
        ("Lombardia", "25"),
        ("Marche", "57"),
        ("Molise", "67"),
        ("Piemonte", "21"),
        ("Puglia", "75"),
        ("Toscana", "52"),
        ("Umbria", "55"),
        ("Veneto", "34"),
        ("Friuli-Venezia Giulia", "36"),
        ("Sardegna", "88"),
        ("Sicilia", "82"),
        ("Trentino-Alto Adige", "32"),
        ("Valle D'Aosta", "23"),
    ])
});

pub(super) fn it(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    IT_REGIONS.resolve(entry, entry.admin_name_1.as_deref())
}

static LI_MUNICIPALITIES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Balzers", "01"),
        ("Eschen", "02"),
        ("Gamprin", "03"),
        ("Mauren", "04"),
        ("Planken", "05"),
        ("Ruggell", "06"),
        ("Schaan", "07"),
        ("Schellenberg", "08"),
        ("Triesen", "09"),
        ("Triesenberg", "10"),
        ("Vaduz", "11"),
    ])
});

pub(super) fn li(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    LI_MUNICIPALITIES.resolve(entry, entry.admin_name_1.as_deref())
}

static MC_QUARTERS: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("La Condamine", "CO"),
        ("Fontvieille", "FO"),
        ("Larvotto", "LA"),
        ("Monte-Carlo", "MC"),
        ("Les Moneghetti", "MG"),
        ("Monaco-Ville", "MO"),
        ("Monaco", "MO"),
    ])
});

pub(super) fn mc(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    MC_QUARTERS.resolve(entry, entry.admin_name_3.as_deref())
}

static NL_PROVINCES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Drenthe", "DR"),
        ("Friesland", "FR"),
        ("Gelderland", "GE"),
        ("Groningen", "GR"),
        ("Limburg", "LI"),
        ("Noord-Brabant", "NB"),
        ("Noord-Holland", "NH"),
        ("Utrecht", "UT"),
        ("Zeeland", "ZE"),
        ("Zuid-Holland", "ZH"),
        ("Overijssel", "OV"),
        ("Flevoland", "FL"),
    ])
});

pub(super) fn nl(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    NL_PROVINCES.resolve(entry, entry.admin_name_1.as_deref())
}

static NO_COUNTIES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Agder", "42"),
        ("Innlandet", "34"),
        ("Møre og Romsdal", "15"),
        ("Nordland", "18"),
        ("Oslo County", "03"),
        ("Rogaland", "11"),
        ("Troms og Finnmark", "54"),
        ("Trøndelag", "50"),
        ("Vestfold og Telemark", "38"),
        ("Vestland", "46"),
        ("Viken", "30"),
        ("Jan Mayen", "22"),
        ("Svalbard", "21"),
    ])
});

pub(super) fn no(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    NO_COUNTIES.resolve(entry, entry.admin_name_1.as_deref())
}

static PT_DISTRICTS: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Aveiro", "01"),
        ("Beja", "02"),
        ("Braga", "03"),
        ("Bragança", "04"),
        ("Castelo Branco", "05"),
        ("Coimbra", "06"),
        ("Évora", "07"),
        ("Faro", "08"),
        ("Guarda", "09"),
        ("Leiria", "10"),
        ("Lisboa", "11"),
        ("Portalegre", "12"),
        ("Porto", "13"),
        ("Santarém", "14"),
        ("Setúbal", "15"),
        ("Viana do Castelo", "16"),
        ("Vila Real", "17"),
        ("Viseu", "18"),
        ("Azores", "20"),
        ("Madeira", "30"),
    ])
});

pub(super) fn pt(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    PT_DISTRICTS.resolve(entry, entry.admin_name_1.as_deref())
}

static SE_COUNTIES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Stockholms län", "AB"),
        ("Stockholm", "AB"),
        ("Stockholm County", "AB"),
        ("Skåne", "M"),
        ("Skåne län", "M"),
        ("Västra Götaland", "O"),
        ("Gotlands län", "I"),
        ("Gotland", "I"),
        ("Västmanland", "U"),
        ("Uppsala", "C"),
    ])
});

/// Source admin codes are already ISO; names are the fallback
pub(super) fn se(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    if let Some(code) = entry.admin_code_1.as_deref() {
        return Resolution::code(code);
    }
    SE_COUNTIES.resolve(
        entry,
        first_present(&[entry.admin_name_1.as_deref(), entry.municipality.as_deref()]),
    )
}

/// Castelli keyed by postal code
static SM_POSTAL_CODES: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("47890", "07"),
        ("47891", "09"),
        ("47892", "01"),
        ("47893", "06"),
        ("47894", "02"),
        ("47895", "03"),
        ("47896", "04"),
        ("47897", "05"),
        ("47898", "08"),
        ("47899", "09"),
    ])
});

pub(super) fn sm(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    if entry.postal_code.is_empty() {
        return Resolution::NoRegion;
    }
    SM_POSTAL_CODES.resolve(entry, Some(entry.postal_code.as_str()))
}
