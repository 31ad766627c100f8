use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A validated content entry: slug from its path, markdown body, typed data.
#[derive(Debug, Clone, Serialize)]
pub struct ContentEntry<T> {
    pub slug: String,
    #[serde(flatten)]
    pub data: T,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub hero_image: String,
    pub price: Option<f64>,

    pub main_heading: Option<String>,
    pub main_description1: Option<String>,
    pub main_description2: Option<String>,
    pub main_image: Option<String>,

    pub icon_features: Option<Vec<IconFeature>>,

    pub packages_heading: Option<String>,
    pub packages_subheading: Option<String>,
    pub packages: Option<Vec<Package>>,

    pub additional_section: Option<AdditionalSection>,

    pub process_heading: Option<String>,
    pub process_subheading: Option<String>,
    pub process: Option<Vec<ProcessStep>>,

    pub benefits: Option<Vec<Benefit>>,

    pub faqs: Vec<Faq>,

    pub cta_heading: Option<String>,
    pub cta_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconFeature {
    /// Lucide icon name
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Priced package tier, e.g. "Gold" with a "RECOMMENDED" badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub price: f64,
    pub badge: Option<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalSection {
    pub heading: String,
    pub subheading: Option<String>,
    pub cards: Vec<SectionCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCard {
    pub title: String,
    pub description: String,
    pub solution: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub step: f64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogEntry {
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "coerce_date")]
    pub pub_date: DateTime<Utc>,
    #[serde(default, deserialize_with = "coerce_optional_date")]
    pub updated_date: Option<DateTime<Utc>>,
    pub hero_image: Option<String>,
}

/// Date formats accepted in frontmatter. Values without an offset are read
/// as UTC, date-only values as midnight UTC, and a bare integer as epoch
/// milliseconds.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok());
    if let Some(dt) = naive {
        return Some(dt.and_utc());
    }
    ["%Y-%m-%d", "%b %d %Y", "%B %d %Y", "%b %d, %Y", "%B %d, %Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn coerce_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw:?}")))
}

fn coerce_optional_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_date(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw:?}"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date_formats() {
        let expected = Utc.with_ymd_and_hms(2022, 7, 8, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2022-07-08"), Some(expected));
        assert_eq!(parse_date("Jul 08 2022"), Some(expected));
        assert_eq!(parse_date("July 8, 2022"), Some(expected));
        assert_eq!(parse_date("2022-07-08T04:00:00+04:00"), Some(expected));
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_parse_date_without_offset_or_as_millis() {
        let ten = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        assert_eq!(parse_date("2024-01-15T10:00:00"), Some(ten));
        assert_eq!(parse_date("2024-01-15T10:00"), Some(ten));
        assert_eq!(parse_date("2024-01-15 10:00"), Some(ten));
        assert_eq!(parse_date("2024-01-15 10:00:00"), Some(ten));
        assert_eq!(
            parse_date("1700000000000"),
            Some(Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap())
        );
    }

    #[test]
    fn test_blog_entry_with_numeric_pub_date() {
        let yaml = "title: T\ndescription: D\npubDate: 1700000000000\n";
        let entry: BlogEntry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.pub_date, Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap());
    }

    #[test]
    fn test_service_entry_minimal() {
        let yaml = r#"
title: Paint Protection Film
subtitle: Invisible armour
description: Self-healing film
heroImage: /images/ppf.jpg
faqs:
  - question: How long does it last?
    answer: Up to 10 years.
"#;
        let entry: ServiceEntry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.hero_image, "/images/ppf.jpg");
        assert_eq!(entry.faqs.len(), 1);
        assert!(entry.packages.is_none());
    }

    #[test]
    fn test_service_entry_requires_faqs() {
        let yaml = "title: t\nsubtitle: s\ndescription: d\nheroImage: h\n";
        let err = serde_yaml::from_str::<ServiceEntry>(yaml).unwrap_err();
        assert!(err.to_string().contains("faqs"));
    }

    #[test]
    fn test_service_packages() {
        let yaml = r#"
title: Ceramic
subtitle: Gloss
description: Coating
heroImage: h.jpg
price: 1500
packages:
  - name: Gold
    price: 2500
    badge: RECOMMENDED
    features: [5 year warranty, Wheels]
process:
  - step: 1
    title: Wash
    description: Decontamination wash
faqs: []
"#;
        let entry: ServiceEntry = serde_yaml::from_str(yaml).unwrap();
        let packages = entry.packages.unwrap();
        assert_eq!(packages[0].badge.as_deref(), Some("RECOMMENDED"));
        assert_eq!(packages[0].features.len(), 2);
        assert_eq!(entry.price, Some(1500.0));
        assert_eq!(entry.process.unwrap()[0].title, "Wash");
    }

    #[test]
    fn test_blog_entry_dates() {
        let yaml = "title: t\ndescription: d\npubDate: Jul 08 2022\nupdatedDate: 2022-08-01\n";
        let entry: BlogEntry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.pub_date, Utc.with_ymd_and_hms(2022, 7, 8, 0, 0, 0).unwrap());
        assert_eq!(entry.updated_date, Some(Utc.with_ymd_and_hms(2022, 8, 1, 0, 0, 0).unwrap()));
        assert!(entry.hero_image.is_none());
    }

    #[test]
    fn test_blog_entry_rejects_bad_date() {
        let yaml = "title: t\ndescription: d\npubDate: someday\n";
        assert!(serde_yaml::from_str::<BlogEntry>(yaml).is_err());
    }
}
