//! Translated labels for the country views.

use crate::model::input::Language;

/// A piece of view text available in every supported language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    BackToCountries,
    Loading,
    Error,
    NoData,
    NoDataMessage,
    KeyInformation,
    Capital,
    CapitalTooltip,
    Population,
    PopulationTooltip,
    Area,
    AreaTooltip,
    Continent,
    ContinentTooltip,
    Region,
    RegionTooltip,
    DetailedInformation,
    Subregion,
    Languages,
    Currencies,
    Timezones,
    BorderingCountries,
    CallingCode,
    TopLevelDomain,
    Independent,
    UnMember,
    Coordinates,
    DrivingSide,
    AddToFavorites,
    RemoveFromFavorites,
    MapNotAvailable,
}

impl Label {
    pub const ALL: [Label; 31] = [
        Self::BackToCountries,
        Self::Loading,
        Self::Error,
        Self::NoData,
        Self::NoDataMessage,
        Self::KeyInformation,
        Self::Capital,
        Self::CapitalTooltip,
        Self::Population,
        Self::PopulationTooltip,
        Self::Area,
        Self::AreaTooltip,
        Self::Continent,
        Self::ContinentTooltip,
        Self::Region,
        Self::RegionTooltip,
        Self::DetailedInformation,
        Self::Subregion,
        Self::Languages,
        Self::Currencies,
        Self::Timezones,
        Self::BorderingCountries,
        Self::CallingCode,
        Self::TopLevelDomain,
        Self::Independent,
        Self::UnMember,
        Self::Coordinates,
        Self::DrivingSide,
        Self::AddToFavorites,
        Self::RemoveFromFavorites,
        Self::MapNotAvailable,
    ];
}

const COUNT: usize = Label::ALL.len();

/// Text of `label` in `language`.
pub fn label(language: Language, label: Label) -> &'static str {
    let table = match language {
        Language::En => &EN,
        Language::Si => &SI,
        Language::Ta => &TA,
        Language::De => &DE,
        Language::Zh => &ZH,
    };

    table[label as usize]
}

const EN: [&str; COUNT] = [
    "Back to Countries",
    "Loading...",
    "Error",
    "No Data",
    "No country data found for the provided code.",
    "Key Information",
    "Capital",
    "Main administrative city",
    "Population",
    "Total inhabitants",
    "Area",
    "Land area in square kilometers",
    "Continent",
    "Geographical continent",
    "Region",
    "Geopolitical region",
    "Detailed Information",
    "Subregion",
    "Languages",
    "Currencies",
    "Timezones",
    "Bordering Countries",
    "Calling Code",
    "Top-Level Domain",
    "Independent",
    "UN Member",
    "Coordinates",
    "Driving Side",
    "Add to favorites",
    "Remove from favorites",
    "Map not available",
];

const SI: [&str; COUNT] = [
    "රටවල් වෙත ආපසු",
    "පූරණය වෙමින්...",
    "දෝෂය",
    "දත්ත නැත",
    "ලබා දී ඇති කේතය සඳහා රටේ දත්ත හමු නොවීය.",
    "ප්‍රධාන තොරතුරු",
    "අගනුවර",
    "ප්‍රධාන පරිපාලන නගරය",
    "ජනගහනය",
    "මුළු වැසියන්",
    "වර්ගඵලය",
    "වර්ග කිලෝමීටර් ඒකකවල භූමි ප්‍රමාණය",
    "මහාද්වීපය",
    "භූගෝලීය මහාද්වීපය",
    "කලාපය",
    "භූ-දේශපාලන කලාපය",
    "විස්තරාත්මක තොරතුරු",
    "උපකලාපය",
    "භාෂා",
    "මුදල්",
    "වේලා කලාප",
    "දේශසීමා රටවල්",
    "ඇමතුම් කේතය",
    "ඉහළ මට්ටමේ වසම",
    "ස්වාධීන",
    "එක්සත් ජාතීන්ගේ සාමාජික",
    "ඛණ්ඩාංක",
    "රිය පැදවීමේ පැත්ත",
    "ප්‍රියතමයන්ට එක් කරන්න",
    "ප්‍රියතමයන්ගෙන් ඉවත් කරන්න",
    "සිතියම ලබා ගත නොහැක",
];

const TA: [&str; COUNT] = [
    "நாடுகளுக்கு திரும்பு",
    "ஏற்றுகிறது...",
    "பிழை",
    "தரவு இல்லை",
    "கொடுக்கப்பட்ட குறியீட்டிற்கு நாட்டின் தரவு கிடைக்கவில்லை.",
    "முக்கிய தகவல்",
    "தலைநகரம்",
    "முதன்மை நிர்வாக நகரம்",
    "மக்கள்தொகை",
    "மொத்த குடிமக்கள்",
    "பரப்பளவு",
    "சதுர கிலோமீட்டரில் நிலப்பரப்பு",
    "கண்டம்",
    "புவியியல் கண்டம்",
    "பிராந்தியம்",
    "புவி-அரசியல் பிராந்தியம்",
    "விரிவான தகவல்",
    "துணைப் பிராந்தியம்",
    "மொழிகள்",
    "நாணயங்கள்",
    "நேர மண்டலங்கள்",
    "எல்லை நாடுகள்",
    "அழைப்பு குறியீடு",
    "மேல் நிலை டொமைன்",
    "சுதந்திரமான",
    "ஐநா உறுப்பினர்",
    "ஆயத்தொலைவுகள்",
    "வாகனம் ஓட்டும் பக்கம்",
    "பிடித்தவைகளில் சேர்",
    "பிடித்தவைகளில் இருந்து நீக்கு",
    "வரைபடம் கிடைக்கவில்லை",
];

const DE: [&str; COUNT] = [
    "Zurück zu den Ländern",
    "Laden...",
    "Fehler",
    "Keine Daten",
    "Für den angegebenen Code wurden keine Länderdaten gefunden.",
    "Wichtige Informationen",
    "Hauptstadt",
    "Hauptverwaltungsstadt",
    "Bevölkerung",
    "Gesamtzahl der Einwohner",
    "Fläche",
    "Landfläche in Quadratkilometern",
    "Kontinent",
    "Geografischer Kontinent",
    "Region",
    "Geopolitische Region",
    "Detaillierte Informationen",
    "Subregion",
    "Sprachen",
    "Währungen",
    "Zeitzonen",
    "Nachbarländer",
    "Telefonvorwahl",
    "Top-Level-Domain",
    "Unabhängig",
    "UN-Mitglied",
    "Koordinaten",
    "Fahrseite",
    "Zu Favoriten hinzufügen",
    "Aus Favoriten entfernen",
    "Karte nicht verfügbar",
];

const ZH: [&str; COUNT] = [
    "返回国家列表",
    "加载中...",
    "错误",
    "无数据",
    "未找到提供的代码对应的国家数据。",
    "关键信息",
    "首都",
    "主要行政城市",
    "人口",
    "总居民数",
    "面积",
    "以平方公里为单位的土地面积",
    "大陆",
    "地理大陆",
    "地区",
    "地缘政治地区",
    "详细信息",
    "子区域",
    "语言",
    "货币",
    "时区",
    "邻国",
    "电话代码",
    "顶级域名",
    "独立",
    "联合国成员",
    "坐标",
    "驾驶侧",
    "添加到收藏",
    "从收藏中移除",
    "地图不可用",
];
