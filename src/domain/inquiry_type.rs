use std::fmt;
use std::str::FromStr;

/// The kind of session a visitor is asking about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InquiryType {
    #[default]
    General,
    Wedding,
    Couples,
    Family,
    Lifestyle,
}

impl InquiryType {
    /// Every inquiry type in the order the form lists them
    pub const ALL: [InquiryType; 5] = [
        InquiryType::General,
        InquiryType::Wedding,
        InquiryType::Couples,
        InquiryType::Family,
        InquiryType::Lifestyle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Wedding => "Wedding",
            InquiryType::Couples => "Couples",
            InquiryType::Family => "Family",
            InquiryType::Lifestyle => "Lifestyle",
        }
    }

    /// Parse a posted form value, anything unknown is a general inquiry
    pub fn from_form(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for InquiryType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| format!("{} is not an inquiry type", value))
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
