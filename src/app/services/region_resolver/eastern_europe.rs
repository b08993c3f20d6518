//! Eastern Europe

use super::rules::{RegionTable, first_present};
use super::{Resolution, Resolver};
use crate::app::models::{EntryRecord, RegionCatalog};
use std::sync::LazyLock;

pub(super) const RESOLVERS: &[(&str, Resolver)] = &[
    ("BY", by),
    ("MD", md),
    ("RU", ru),
    ("RU2", ru2),
    ("UA", ua),
];

const MINSK_CITY: [&str; 2] = ["Минск", "Minsk"];

/// Includes the `Rodno` misspelling found in the source
static BY_REGIONS: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Brest", "BR"),
        ("Gomel", "HO"),
        ("Grodno", "HR"),
        ("Minsk", "MI"),
        ("Vitebsk", "VI"),
        ("Moghilev", "MA"),
        ("Rodno", "HR"),
    ])
});

pub(super) fn by(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    if entry
        .municipality
        .as_deref()
        .is_some_and(|m| MINSK_CITY.contains(&m))
    {
        return Resolution::code("HM");
    }
    BY_REGIONS.resolve(
        entry,
        first_present(&[entry.admin_name_1.as_deref(), entry.admin_name_2.as_deref()]),
    )
}

static MD_DISTRICTS: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Chisinau", "CU"),
        ("Chișinău", "CU"),
        ("Strășeni District", "ST"),
        ("Raionul Strășeni", "ST"),
        ("Raionul Soroca", "SO"),
        ("Soroca District", "SO"),
        ("Florești District", "FL"),
        ("Raionul Florești", "FL"),
        ("Bălți", "BA"),
        ("Bender", "BD"),
        ("Anenii Noi", "AN"),
        ("АнеНий-Ной", "AN"),
        ("Județul Tighina", "AN"),
        ("Administrative-Territorial Units of the Left Bank of the Dniester", "SN"),
        ("Unitățile administrativ-teritoriale din stînga Nistrului", "SN"),
        ("Ribnita 1", "SN"),
        ("Ofatinti", "SN"),
        ("Lisaia Gora", "SN"),
        ("Ghersunovca", "SN"),
        ("Căușeni District", "CS"),
        ("Raionul Hîncești", "HI"),
        ("Hîncești District", "HI"),
        ("Raionul Orhei", "OR"),
        ("Orhei District", "OR"),
        ("Criuleni District", "CR"),
        ("Ungheni District", "UN"),
        ("Nisporeni District", "NI"),
        ("Raionul Ungheni", "UN"),
        ("Iaşi", "UN"),
        ("Călărași District", "CL"),
        ("Raionul Călărași", "CL"),
        ("Raionul Criuleni", "CR"),
        ("Găgăuzia", "GA"),
        ("Gagauzia", "GA"),
        ("Carbalia", "GA"),
        ("Taraclia District", "TA"),
        ("Raionul Taraclia", "TA"),
        ("Cahul District", "CA"),
        ("Raionul Cahul", "CA"),
        ("Raionul Cimișlia", "CM"),
        ("Cimișlia District", "CM"),
        ("Raionul Ștefan Vodă", "SV"),
        ("Ștefan Vodă District", "SV"),
        ("Raionul Căușeni", "CS"),
        ("Dubăsari District", "DU"),
        ("Raionul Dubăsari", "DU"),
        ("Edineț", "ED"),
        ("Edineţ District", "ED"),
        ("Raionul Briceni", "BR"),
        ("Briceni District", "BR"),
        ("Glodeni District", "GL"),
        ("Glodeni", "GL"),
        ("Balti", "BA"),
        ("Drochia District", "DR"),
        ("Raionul Drochia", "DR"),
        ("Sîngerei District", "SI"),
        ("Sîngerei", "SI"),
        ("Dondușeni District", "DO"),
        ("Raionul Dondușeni", "DO"),
        ("Rîșcani District", "RI"),
        ("Raionul Rîșcani", "RI"),
        ("Rezina District", "RE"),
        ("Raionul Rezina", "RE"),
        ("Buciusca", "RE"),
        ("Telenești District", "TE"),
        ("Telenești", "TE"),
        ("Negureni", "TE"),
        ("Raionul Fălești", "FA"),
        ("Fălești District", "FA"),
        ("Raionul Leova", "LE"),
        ("Leova District", "LE"),
        ("Cantemir District", "CT"),
        ("Raionul Cantemir", "CT"),
        ("Raionul Nisporeni", "NI"),
        ("Șoldănești District", "SD"),
        ("Raionul Șoldănești", "SD"),
        ("Basarabeasca District", "BS"),
        ("Raionul Ialoveni", "IA"),
        ("Ialoveni District", "IA"),
        ("Ocnița District", "OC"),
        ("Raionul Ocnița", "OC"),
    ])
});

pub(super) fn md(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    let name = first_present(&[
        entry.admin_name_1.as_deref(),
        entry.municipality.as_deref(),
    ]);
    MD_DISTRICTS.resolve(entry, name)
}

/// Russian-language names
static RU_SUBJECTS: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Адыгея Республика", "AD"),
        ("Алтай Республика", "AL"),
        ("Алтайский Край", "ALT"),
        ("Амурская Область", "AMU"),
        ("Архангельская Область", "ARK"),
        ("Астраханская Область", "AST"),
        ("Башкортостан Республика", "BA"),
        ("Белгородская Область", "BEL"),
        ("Брянская Область", "BRY"),
        ("Бурятия Республика", "BU"),
        ("Чеченская Республика", "CE"),
        ("Челябинская Область", "CHE"),
        ("Чувашская Республика", "CU"),
        ("Дагестан Республика", "DA"),
        ("Ингушетия Республика", "IN"),
        ("Иркутская Область", "IRK"),
        ("Ивановская Область", "IVA"),
        ("Кабардино-Балкарская Республика", "KB"),
        ("Калининградская Область", "KGD"),
        ("Калмыкия Республика", "KL"),
        ("Калужская Область", "KLU"),
        ("Карачаево-Черкесская Республика", "KC"),
        ("Карелия Республика", "KR"),
        ("Кемеровская Область", "KEM"),
        ("Хабаровский Край", "KHA"),
        ("Хакасия Республика", "KK"),
        ("Кировская Область", "KIR"),
        ("Коми Республика", "KO"),
        ("Костромская Область", "KOS"),
        ("Краснодарский Край", "KDA"),
        ("Курганская Область", "KGN"),
        ("Курская Область", "KRS"),
        ("Ленинградская Область", "LEN"),
        ("Липецкая Область", "LIP"),
        ("Магаданская Область", "MAG"),
        ("Марий Эл Республика", "ME"),
        ("Мордовия Республика", "MO"),
        ("Московская Область", "MOS"),
        ("Москва", "MOW"),
        ("Мурманская Область", "MUR"),
        ("Нижегородская Область", "NIZ"),
        ("Новгородская Область", "NGR"),
        ("Новосибирская Область", "NVS"),
        ("Омская Область", "OMS"),
        ("Оренбургская Область", "ORE"),
        ("Орловская Область", "ORL"),
        ("Пензенская Область", "PNZ"),
        ("Приморский Край", "PRI"),
        ("Псковская Область", "PSK"),
        ("Ростовская Область", "ROS"),
        ("Рязанская Область", "RYA"),
        ("Саха (Якутия) Республика", "SA"),
        ("Сахалинская Область", "SAK"),
        ("Самарская Область", "SAM"),
        ("Санкт-Петербург", "SPE"),
        ("Саратовская Область", "SAR"),
        ("Северная Осетия-Алания Республика", "SE"),
        ("Смоленская Область", "SMO"),
        ("Ставропольский Край", "STA"),
        ("Свердловская Область", "SVE"),
        ("Тамбовская Область", "TAM"),
        ("Татарстан Республика", "TA"),
        ("Томская Область", "TOM"),
        ("Тульская Область", "TUL"),
        ("Тверская Область", "TVE"),
        ("Тюменская Область", "TYU"),
        ("Тыва Республика", "TY"),
        ("Удмуртская Республика", "UD"),
        ("Ульяновская Область", "ULY"),
        ("Владимирская Область", "VLA"),
        ("Волгоградская Область", "VGG"),
        ("Вологодская Область", "VLG"),
        ("Воронежская Область", "VOR"),
        ("Ярославская Область", "YAR"),
        ("Пермский Край", "PER"),
        ("Красноярский Край", "KYA"),
        ("Камчатская Область", "KAM"),
        ("Читинская Область", "ZAB"),
        ("Биробиджан", "YEV"),
        ("Биробиджан 2", "YEV"),
        ("Биробиджан 5", "YEV"),
        ("Биробиджан 6", "YEV"),
        ("Биробиджан 11", "YEV"),
        ("Биробиджан 13", "YEV"),
        ("Биробиджан 14", "YEV"),
        ("Биробиджан 15", "YEV"),
        ("Биробиджан 16", "YEV"),
        ("Биробиджан 17", "YEV"),
        ("Биробиджан-Сту", "YEV"),
        ("ОБЛУЧЕНСКИЙ РАЙОН", "YEV"),
        ("СМИДОВИЧСКИЙ РАЙОН", "YEV"),
        ("БИРОБИДЖАНСКИЙ РАЙОН", "YEV"),
        ("Уфпс Еврейской Автономной Области", "YEV"),
        ("ОКТЯБРЬСКИЙ РАЙОН", "PRI"),
        ("ЛЕНИНСКИЙ РАЙОН", "MOS"),
        ("Анадырь", "CHU"),
        ("БЕРИНГОВСКИЙ РАЙОН", "CHU"),
        ("ИУЛЬТИНСКИЙ РАЙОН", "CHU"),
        ("ПРОВИДЕНСКИЙ РАЙОН", "CHU"),
        ("ЧУКОТСКИЙ РАЙОН", "CHU"),
        ("ШМИДТОВСКИЙ РАЙОН", "CHU"),
        ("ЧАУНСКИЙ РАЙОН", "CHU"),
        ("БИЛИБИНСКИЙ РАЙОН", "CHU"),
        ("АНАДЫРСКИЙ РАЙОН", "CHU"),
        ("Уфпс Чукотского Автономного Округа", "CHU"),
    ])
});

pub(super) fn ru(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    let name = first_present(&[
        entry.admin_name_1.as_deref(),
        entry.admin_name_2.as_deref(),
        entry.admin_name_3.as_deref(),
        entry.municipality.as_deref(),
    ]);
    // Leased to Kazakhstan, no Russian subdivision
    if name == Some("Байконур") {
        return Resolution::NoRegion;
    }
    RU_SUBJECTS.resolve(entry, name)
}

/// English names used by the alternate source
static RU2_SUBJECTS: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Adygea, Republic Of", "AD"),
        ("Altai Republic", "AL"),
        ("Bashkortostan, Republic Of", "BA"),
        ("Buryatia, Republic Of", "BU"),
        ("Chechen Republic", "CE"),
        ("Chuvash Republic", "CU"),
        ("Dagestan, Republic Of", "DA"),
        ("Ingushetia, Republic Of", "IN"),
        ("Kabardino-Balkar Republic", "KB"),
        ("Karachay-Cherkess Republic", "KC"),
        ("Khakassia, Republic Of", "KK"),
        ("Kalmykia, Republic Of", "KL"),
        ("Komi Republic", "KO"),
        ("Karelia, Republic Of", "KR"),
        ("Mari El Republic", "ME"),
        ("Mordovia, Republic Of", "MO"),
        ("Sakha (Yakutia) Republic", "SA"),
        ("North Ossetia-Alania, Republic Of", "SE"),
        ("Tatarstan, Republic Of", "TA"),
        ("Tuva Republic", "TY"),
        ("Udmurt Republic", "UD"),
        ("Altai Krai", "ALT"),
        ("Amur Oblast", "AMU"),
        ("Arkhangelsk Oblast", "ARK"),
        ("Astrakhan Oblast", "AST"),
        ("Belgorod Oblast", "BEL"),
        ("Bryansk Oblast", "BRY"),
        ("Chelyabinsk Oblast", "CHE"),
        ("Irkutsk Oblast", "IRK"),
        ("Ivanovo Oblast", "IVA"),
        ("Kamchatka Krai", "KAM"),
        ("Krasnodar Krai", "KDA"),
        ("Kemerovo Oblast", "KEM"),
        ("Khabarovsk Krai", "KHA"),
        ("Khanty?Mansi Autonomous Okrug ? Yugra", "KHM"),
        ("Kaliningrad Oblast", "KGD"),
        ("Kurgan Oblast", "KGN"),
        ("Kirov Oblast", "KIR"),
        ("Kaluga Oblast", "KLU"),
        ("Kostroma Oblast", "KOS"),
        ("Kursk Oblast", "KRS"),
        ("Krasnoyarsk Krai", "KYA"),
        ("Leningrad Oblast", "LEN"),
        ("Lipetsk Oblast", "LIP"),
        ("Magadan Oblast", "MAG"),
        ("Moscow Oblast", "MOS"),
        ("Moscow", "MOW"),
        ("Murmansk Oblast", "MUR"),
        ("Novgorod Oblast", "NGR"),
        ("Novosibirsk Oblast", "NVS"),
        ("Nizhny Novgorod Oblast", "NIZ"),
        ("Omsk Oblast", "OMS"),
        ("Orenburg Oblast", "ORE"),
        ("Oryol Oblast", "ORL"),
        ("Penza Oblast", "PNZ"),
        ("Primorsky Krai", "PRI"),
        ("Perm Krai", "PER"),
        ("Pskov Oblast", "PSK"),
        ("Rostov Oblast", "ROS"),
        ("Ryazan Oblast", "RYA"),
        ("Sakhalin Oblast", "SAK"),
        ("Samara Oblast", "SAM"),
        ("Saratov Oblast", "SAR"),
        ("Smolensk Oblast", "SMO"),
        ("Saint Petersburg", "SPE"),
        ("Sverdlovsk Oblast", "SVE"),
        ("Tambov Oblast", "TAM"),
        ("Tomsk Oblast", "TOM"),
        ("Tula Oblast", "TUL"),
        ("Tver Oblast", "TVE"),
        ("Tyumen Oblast", "TYU"),
        ("Ulyanovsk Oblast", "ULY"),
        ("Volgograd Oblast", "VGG"),
        ("Voronezh Oblast", "VOR"),
        ("Vladimir Oblast", "VLA"),
        ("Vologda Oblast", "VLG"),
        ("Yaroslavl Oblast", "YAR"),
    ])
});

pub(super) fn ru2(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    let name = first_present(&[
        entry.admin_name_1.as_deref(),
        entry.admin_name_2.as_deref(),
        entry.admin_name_3.as_deref(),
        entry.municipality.as_deref(),
    ]);
    if name == Some("Sevastopol") {
        return Resolution::NoRegion;
    }
    RU2_SUBJECTS.resolve(entry, name)
}

static UA_OBLASTS: LazyLock<RegionTable> = LazyLock::new(|| {
    RegionTable::new(&[
        ("Cherkaska", "71"),
        ("Chernihivska", "74"),
        ("Chernivetska", "77"),
        ("Dnipropetrovska", "12"),
        ("Donetska", "14"),
        ("Ivano-Frankivska", "26"),
        ("Kharkivska", "63"),
        ("Khersonska", "65"),
        ("Khmelnytska", "68"),
        ("Kirovohradska", "35"),
        ("Kyivska", "32"),
        ("Kyiv", "30"),
        ("Luhanska", "09"),
        ("Lvivska", "46"),
        ("Mykolaivska", "48"),
        ("Odeska", "51"),
        ("Poltavska", "53"),
        ("Rivnenska", "56"),
        ("Sumska", "59"),
        ("Ternopilska", "61"),
        ("Vinnytska", "05"),
        ("Volynska", "07"),
        ("Zakarpatska", "21"),
        ("Zaporizka", "23"),
        ("Zhytomyrska", "18"),
    ])
});

pub(super) fn ua(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    UA_OBLASTS.resolve(entry, entry.admin_name_1.as_deref())
}
