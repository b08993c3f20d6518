//! United Kingdom

use super::rules::RegionTable;
use super::{Resolution, Resolver};
use crate::app::models::{EntryRecord, RegionCatalog};
use std::sync::LazyLock;

pub(super) const RESOLVERS: &[(&str, Resolver)] = &[("GB", gb)];

/// Counties, unitary authorities and districts
static GB_AREAS: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Cambridgeshire", "CAM"),
        ("Cumbria", "CMA"),
        ("Derbyshire", "DBY"),
        ("Devon", "DEV"),
        ("Dorset", "DOR"),
        ("East Sussex", "ESX"),
        ("Essex", "ESS"),
        ("Gloucestershire", "GLS"),
        ("Hampshire", "HAM"),
        ("Hertfordshire", "HRT"),
        ("Kent", "KEN"),
        ("Lancashire", "LAN"),
        ("Leicestershire", "LEC"),
        ("Lincolnshire", "LIN"),
        ("Norfolk", "NFK"),
        ("North Yorkshire", "NYK"),
        ("Nottinghamshire", "NTT"),
        ("Oxfordshire", "OXF"),
        ("Somerset", "SOM"),
        ("Staffordshire", "STS"),
        ("Suffolk", "SFK"),
        ("Surrey", "SRY"),
        ("Warwickshire", "WAR"),
        ("West Sussex", "WSX"),
        ("Worcestershire", "WOR"),
        ("City of London", "LND"),
        ("Barking and Dagenham", "BDG"),
        ("Barnet", "BNE"),
        ("Bexley", "BEX"),
        ("Brent", "BEN"),
        ("Bromley", "BRY"),
        ("Camden", "CMD"),
        ("Croydon", "CRY"),
        ("Ealing", "EAL"),
        ("Enfield", "ENF"),
        ("Greenwich", "GRE"),
        ("Hackney", "HCK"),
        ("Hammersmith and Fulham", "HMF"),
        ("Haringey", "HRY"),
        ("Harrow", "HRW"),
        ("Havering", "HAV"),
        ("Hillingdon", "HIL"),
        ("Hounslow", "HNS"),
        ("Islington", "ISL"),
        ("Kensington and Chelsea", "KEC"),
        ("Kingston upon Thames", "KTT"),
        ("Lambeth", "LBH"),
        ("Lewisham", "LEW"),
        ("Merton", "MRT"),
        ("Newham", "NWM"),
        ("Redbridge", "RBD"),
        ("Richmond upon Thames", "RIC"),
        ("Southwark", "SWK"),
        ("Sutton", "STN"),
        ("Tower Hamlets", "TWH"),
        ("Waltham Forest", "WFT"),
        ("Wandsworth", "WND"),
        ("Westminster", "WSM"),
        ("Barnsley", "BNS"),
        ("Birmingham", "BIR"),
        ("Bolton", "BOL"),
        ("Bradford", "BRD"),
        ("Bury", "BUR"),
        ("Calderdale", "CLD"),
        ("Coventry", "COV"),
        ("Doncaster", "DNC"),
        ("Dudley", "DUD"),
        ("Gateshead", "GAT"),
        ("Kirklees", "KIR"),
        ("Knowsley", "KWL"),
        ("Leeds", "LDS"),
        ("Liverpool", "LIV"),
        ("Manchester", "MAN"),
        ("Newcastle upon Tyne", "NET"),
        ("North Tyneside", "NTY"),
        ("Oldham", "OLD"),
        ("Rochdale", "RCH"),
        ("Rotherham", "ROT"),
        ("St. Helends", "SHN"),
        ("Salford", "SLF"),
        ("Sandwell", "SAW"),
        ("Sefton", "SFT"),
        ("Sheffield", "SHF"),
        ("Solihull", "SOL"),
        ("South Tyneside", "STY"),
        ("Stockport", "SKP"),
        ("Sunderland", "SND"),
        ("Tameside", "TAM"),
        ("Trafford", "TRF"),
        ("Wakefield", "WKF"),
        ("Walsall", "WLL"),
        ("Wigan", "WGN"),
        ("Wirral", "WRL"),
        ("Wolverhampton", "WLV"),
        ("Bath and North East Somerset", "BAS"),
        ("Bedford", "BDF"),
        ("Blackburn with Barwen", "BBD"),
        ("Blackpool", "BPL"),
        ("Bournemouth, Christchurch and Poole", "BCP"),
        ("Bracknell Forest", "BRC"),
        ("Brighton and Hove", "BNH"),
        ("Bristol, City of", "BST"),
        ("Buckinghamshire", "BKM"),
        ("Central Bedfordshire", "CBF"),
        ("Cheshire East", "CHE"),
        ("Cheshire West and Chester", "CHW"),
        ("Cornwall", "CON"),
        ("Darlington", "DAL"),
        ("Derby", "DER"),
        ("County Durham", "DUR"),
        ("East Riding of Yorkshire", "ERY"),
        ("Halton", "HAL"),
        ("Hartlepool", "HPL"),
        ("Herefordshire", "HEF"),
        ("Isle of Wight", "IOW"),
        ("Isles of Scilly", "IOS"),
        ("Kingston upon Hull", "KHL"),
        ("Leicester", "LCE"),
        ("Luton", "LUT"),
        ("Medway", "MDW"),
        ("Middlesbrough", "MDB"),
        ("Milton Keynes", "MIK"),
        ("North East Lincolnshire", "NEL"),
        ("North Lincolnshire", "NLN"),
        ("North Northamptonshire", "NNH"),
        ("North Somerset", "NSM"),
        ("Northumberland", "NBL"),
        ("Nottingham", "NGM"),
        ("Peterborough", "PTE"),
        ("Plymouth", "PLY"),
        ("Portsmouth", "POR"),
        ("Reading", "RDG"),
        ("Redcar and Cleveland", "RCC"),
        ("Rutland", "RUT"),
        ("Shropshire", "SHR"),
        ("Slough", "SLG"),
        ("South Gloucestershire", "SGC"),
        ("Southampton", "STH"),
        ("Southend-on-Sea", "SOS"),
        ("Stockton-on-Tees", "STT"),
        ("Stoke-on-Trent", "STE"),
        ("Swindon", "SWD"),
        ("Telford and Wrekin", "TFW"),
        ("Thurrock", "THR"),
        ("Torbay", "TOB"),
        ("Warrington", "WRT"),
        ("West Berkshire", "WBK"),
        ("West Northamptonshire", "WNH"),
        ("Wiltshire", "WIL"),
        ("Windsor and Maidenhead", "WNM"),
        ("Wokingham", "WOK"),
        ("York", "YOR"),
        ("Antrim and Newtownabbey", "ANN"),
        ("Ards and North Down", "AND"),
        ("Armagh City, Banbridge and Craigavon", "ABC"),
        ("Belfast City", "BFS"),
        ("Causeway Coast and Glens", "CCG"),
        ("Derry and Strabane", "DRS"),
        ("Fermanagh and Omagh", "FMO"),
        ("Lisburn and Castlereagh", "LBC"),
        ("Mid and East Antrim", "MEA"),
        ("Mid-Ulster", "MUL"),
        ("Newry, Mourne and Down", "NMD"),
        ("Aberdeen City", "ABE"),
        ("Aberdeenshire", "ABD"),
        ("Angus", "ANS"),
        ("Argyll and Bute", "AGB"),
        ("Clackmannanshire", "CLK"),
        ("Dumbfries and Galloway", "DGY"),
        ("Dundee City", "DND"),
        ("East Ayrshire", "EAY"),
        ("East Dunbartonshire", "EDU"),
        ("East Lothian", "ELN"),
        ("East Renfrewshire", "ERW"),
        ("Edinburgh, City of", "EDH"),
        ("Eilean Siar", "ELS"),
        ("Falkirk", "FAL"),
        ("Fife", "FIF"),
        ("Glasgow City", "GLG"),
        ("Highland", "HLD"),
        ("Inverclyde", "IVC"),
        ("Midlothian", "MLN"),
        ("Moray", "MRY"),
        ("North Ayrshire", "NAY"),
        ("North Lanarkshire", "NLK"),
        ("Orkney Islands", "ORK"),
        ("Perth and Kinross", "PKN"),
        ("Renfrewshire", "RFW"),
        ("Scottish Borders", "SCB"),
        ("Shetland Islands", "ZET"),
        ("South Ayrshire", "SAY"),
        ("South Lanarkshire", "SLK"),
        ("Stirling", "STG"),
        ("West Dunbartonshire", "WDU"),
        ("West Lothian", "WLN"),
        ("Blaenau Gwent", "BGW"),
        ("Bridgend", "BGE"),
        ("Caerphilly", "CAY"),
        ("Cardiff", "CRF"),
        ("Carmarthenshire", "CMN"),
        ("Ceredigion", "CGN"),
        ("Conwy", "CWY"),
        ("Denbighshire", "DEN"),
        ("Flintshire", "FLN"),
        ("Gwynedd", "GWN"),
        ("Isle of Anglesey", "AGY"),
        ("Merthyr Tydfil", "MTY"),
        ("Monmouthshire", "MON"),
        ("Neath Port Talbot", "NTL"),
        ("Newport", "NWP"),
        ("Pembrokeshire", "PEM"),
        ("Powys", "POW"),
        ("Rhondda Cynon Taff", "RCT"),
        ("Swansea", "SWA"),
        ("Torfaen", "TOF"),
        ("Vale of Glamorgan, The", "VGL"),
        ("Wrexham", "WRX"),
    ])
});

/// Counties whose districts are separate subdivisions
const METROPOLITAN_COUNTIES: [&str; 12] = [
    "Bedfordshire",
    "Berkshire",
    "Bristol",
    "Greater London",
    "Greater Manchester",
    "Merseyside",
    "Northamptonshire",
    "South Yorkshire",
    "Tyne and Wear",
    "West Midlands",
    "West Yorkshire",
    "Cheshire",
];

/// County column first, district column second
pub(super) fn gb(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    let county = entry.admin_name_1.as_deref();
    let district = entry.admin_name_2.as_deref();

    if let Some(code) = district.and_then(|d| GB_AREAS.get(d)) {
        return Resolution::code(code);
    }

    if district.is_some_and(|d| METROPOLITAN_COUNTIES.contains(&d)) {
        return county
            .and_then(|c| GB_AREAS.get(c))
            .map(Resolution::code)
            .unwrap_or(Resolution::NoRegion);
    }

    if county.is_none() || district.is_none() {
        return Resolution::NoRegion;
    }

    Resolution::unknown(entry, district)
}
