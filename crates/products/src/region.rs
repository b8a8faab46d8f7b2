//! Production regions: the 47 prefectures and the "all regions" selector.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use ricefinder_core::DomainError;

/// Label of the sentinel selector that disables the region constraint.
pub const ALL_REGIONS_LABEL: &str = "全国";

macro_rules! prefectures {
    ($($variant:ident => $label:literal, $slug:literal;)+) => {
        /// A Japanese prefecture a product is sourced from.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum Prefecture {
            $($variant,)+
        }

        impl Prefecture {
            /// Every prefecture, north to south (picker order).
            pub const ALL: &'static [Prefecture] = &[$(Prefecture::$variant,)+];

            /// Japanese display label, e.g. `新潟県`.
            pub fn label(self) -> &'static str {
                match self {
                    $(Prefecture::$variant => $label,)+
                }
            }

            /// Romanized lowercase slug, e.g. `niigata`.
            pub fn slug(self) -> &'static str {
                match self {
                    $(Prefecture::$variant => $slug,)+
                }
            }
        }
    };
}

prefectures! {
    Hokkaido => "北海道", "hokkaido";
    Aomori => "青森県", "aomori";
    Iwate => "岩手県", "iwate";
    Miyagi => "宮城県", "miyagi";
    Akita => "秋田県", "akita";
    Yamagata => "山形県", "yamagata";
    Fukushima => "福島県", "fukushima";
    Ibaraki => "茨城県", "ibaraki";
    Tochigi => "栃木県", "tochigi";
    Gunma => "群馬県", "gunma";
    Saitama => "埼玉県", "saitama";
    Chiba => "千葉県", "chiba";
    Tokyo => "東京都", "tokyo";
    Kanagawa => "神奈川県", "kanagawa";
    Niigata => "新潟県", "niigata";
    Toyama => "富山県", "toyama";
    Ishikawa => "石川県", "ishikawa";
    Fukui => "福井県", "fukui";
    Yamanashi => "山梨県", "yamanashi";
    Nagano => "長野県", "nagano";
    Gifu => "岐阜県", "gifu";
    Shizuoka => "静岡県", "shizuoka";
    Aichi => "愛知県", "aichi";
    Mie => "三重県", "mie";
    Shiga => "滋賀県", "shiga";
    Kyoto => "京都府", "kyoto";
    Osaka => "大阪府", "osaka";
    Hyogo => "兵庫県", "hyogo";
    Nara => "奈良県", "nara";
    Wakayama => "和歌山県", "wakayama";
    Tottori => "鳥取県", "tottori";
    Shimane => "島根県", "shimane";
    Okayama => "岡山県", "okayama";
    Hiroshima => "広島県", "hiroshima";
    Yamaguchi => "山口県", "yamaguchi";
    Tokushima => "徳島県", "tokushima";
    Kagawa => "香川県", "kagawa";
    Ehime => "愛媛県", "ehime";
    Kochi => "高知県", "kochi";
    Fukuoka => "福岡県", "fukuoka";
    Saga => "佐賀県", "saga";
    Nagasaki => "長崎県", "nagasaki";
    Kumamoto => "熊本県", "kumamoto";
    Oita => "大分県", "oita";
    Miyazaki => "宮崎県", "miyazaki";
    Kagoshima => "鹿児島県", "kagoshima";
    Okinawa => "沖縄県", "okinawa";
}

impl core::fmt::Display for Prefecture {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Prefecture {
    type Err = DomainError;

    /// Accepts the Japanese label or the romanized slug (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(p) = Prefecture::ALL
            .iter()
            .copied()
            .find(|p| p.label() == s || p.slug().eq_ignore_ascii_case(s))
        {
            return Ok(p);
        }
        if is_all_regions(s) {
            return Err(DomainError::validation(format!(
                "{s} selects all regions and is not a prefecture"
            )));
        }
        Err(DomainError::validation(format!("unknown prefecture: {s}")))
    }
}

impl TryFrom<String> for Prefecture {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Prefecture> for &'static str {
    fn from(value: Prefecture) -> Self {
        value.label()
    }
}

fn is_all_regions(s: &str) -> bool {
    s == ALL_REGIONS_LABEL || s.eq_ignore_ascii_case("all")
}

/// Region constraint of a search: either every region, or one prefecture.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum RegionFilter {
    #[default]
    All,
    Only(Prefecture),
}

impl RegionFilter {
    /// Whether a product from `prefecture` passes this constraint.
    pub fn admits(self, prefecture: Prefecture) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(p) => p == prefecture,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RegionFilter::All => ALL_REGIONS_LABEL,
            RegionFilter::Only(p) => p.label(),
        }
    }

    /// Every selectable value: the sentinel first, then each prefecture.
    pub fn choices() -> impl Iterator<Item = RegionFilter> {
        core::iter::once(RegionFilter::All)
            .chain(Prefecture::ALL.iter().copied().map(RegionFilter::Only))
    }
}

impl From<Prefecture> for RegionFilter {
    fn from(value: Prefecture) -> Self {
        RegionFilter::Only(value)
    }
}

impl core::fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RegionFilter {
    type Err = DomainError;

    /// Accepts `全国` / `all`, or anything [`Prefecture`] parses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_all_regions(s.trim()) {
            return Ok(RegionFilter::All);
        }
        s.parse().map(RegionFilter::Only)
    }
}

impl TryFrom<String> for RegionFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RegionFilter> for &'static str {
    fn from(value: RegionFilter) -> Self {
        value.label()
    }
}
