//! Area codes accepted by the alerts endpoint.

use thiserror::Error;

/// Areas the NWS `area` parameter accepts: states, DC, territories and
/// marine regions.
const VALID_AREAS: &[&str] = &[
    "AL", "AK", "AS", "AR", "AZ", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "GU", "HI", "ID",
    "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE",
    "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "PR", "RI", "SC", "SD",
    "TN", "TX", "UT", "VT", "VI", "VA", "WA", "WV", "WI", "WY", "MP", "PW", "FM", "MH", "AM",
    "AN", "GM", "LC", "LE", "LH", "LM", "LO", "LS", "PH", "PK", "PM", "PS", "PZ", "SL",
];

const NAMES: &[(&str, &str)] = &[
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("american samoa", "AS"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("district of columbia", "DC"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("guam", "GU"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("marshall islands", "MH"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("micronesia", "FM"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("northern mariana islands", "MP"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("palau", "PW"),
    ("pennsylvania", "PA"),
    ("puerto rico", "PR"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virgin islands", "VI"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("washington dc", "DC"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
];

/// Why an area argument was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AreaError {
    #[error("{0} can not be abbreviated. Check spelling or provide a 2 letter abbreviation (i.e. FL, MA).")]
    UnknownName(String),
    #[error("{0} is not a valid state.")]
    InvalidArea(String),
}

/// Two-letter code for a full state or territory name, any case.
pub fn abbreviate(name: &str) -> Option<&'static str> {
    let normalized = name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    NAMES
        .iter()
        .find(|(full, _)| *full == normalized)
        .map(|(_, code)| *code)
}

/// True for a two-letter code the alerts endpoint accepts.
pub fn is_valid_area(code: &str) -> bool {
    VALID_AREAS.contains(&code)
}

/// Turns user input (`fl`, `Florida`, `new  york`) into an area code.
pub fn resolve_area(input: &str) -> Result<String, AreaError> {
    let trimmed = input.trim();
    let code = if trimmed.chars().count() == 2 {
        trimmed.to_uppercase()
    } else {
        abbreviate(trimmed)
            .ok_or_else(|| AreaError::UnknownName(trimmed.to_string()))?
            .to_string()
    };

    if is_valid_area(&code) {
        Ok(code)
    } else {
        Err(AreaError::InvalidArea(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_letter_code() {
        assert_eq!(resolve_area("fl"), Ok("FL".to_string()));
        assert_eq!(resolve_area("MA"), Ok("MA".to_string()));
    }

    #[test]
    fn test_full_name_any_case() {
        assert_eq!(resolve_area("Florida"), Ok("FL".to_string()));
        assert_eq!(resolve_area("NEW  york"), Ok("NY".to_string()));
        assert_eq!(resolve_area("District of Columbia"), Ok("DC".to_string()));
    }

    #[test]
    fn test_marine_zone() {
        assert_eq!(resolve_area("gm"), Ok("GM".to_string()));
    }

    #[test]
    fn test_unknown_name() {
        let err = resolve_area("Floridaa").unwrap_err();
        assert_eq!(err, AreaError::UnknownName("Floridaa".to_string()));
        assert!(err.to_string().contains("can not be abbreviated"));
    }

    #[test]
    fn test_invalid_code() {
        let err = resolve_area("zz").unwrap_err();
        assert_eq!(err.to_string(), "ZZ is not a valid state.");
    }

    #[test]
    fn test_names_map_to_valid_areas() {
        for (name, code) in NAMES {
            assert!(is_valid_area(code), "{name} -> {code}");
        }
    }
}
