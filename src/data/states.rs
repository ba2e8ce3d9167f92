// ---------------------------------------------------------------------------
// U.S. state name → two-letter postal code
// ---------------------------------------------------------------------------

/// The 50 states plus the District of Columbia, sorted by name.
const STATE_CODES: [(&str, &str); 51] = [
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

/// Look up the postal abbreviation for a full state name (exact match).
pub fn postal_code(state: &str) -> Option<&'static str> {
    STATE_CODES
        .binary_search_by(|(name, _)| (*name).cmp(state))
        .ok()
        .map(|i| STATE_CODES[i].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_for_binary_search() {
        assert!(STATE_CODES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn known_states_resolve() {
        assert_eq!(postal_code("California"), Some("CA"));
        assert_eq!(postal_code("District of Columbia"), Some("DC"));
        assert_eq!(postal_code("Wyoming"), Some("WY"));
    }

    #[test]
    fn unknown_states_have_no_code() {
        assert_eq!(postal_code("Ontario"), None);
        assert_eq!(postal_code("california"), None);
        assert_eq!(postal_code(""), None);
    }
}
