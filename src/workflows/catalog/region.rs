use super::domain::Region;

const TELANGANA_MARKERS: &[&str] = &[
    "telangana",
    "hyderabad",
    "secunderabad",
    "osmania",
    "jntuh",
    "jntu hyderabad",
    "kakatiya",
    "warangal",
];

const ANDHRA_MARKERS: &[&str] = &[
    "andhra",
    "visakhapatnam",
    "vizag",
    "vijayawada",
    "amaravati",
    "tirupati",
    "guntur",
    "kakinada",
    "jntuk",
    "jntu kakinada",
    "jntua",
    "anantapur",
];

/// Infer the state an exam is rooted in from its id prefix, falling back to
/// city and university names found in the id or the college list. Records
/// that mention both states stay unassigned.
pub(crate) fn infer_home_region(id: &str, colleges: &[String]) -> Option<Region> {
    let id = id.trim().to_ascii_lowercase();
    if id.starts_with("ts-") || id.starts_with("tg-") {
        return Some(Region::Telangana);
    }
    if id.starts_with("ap-") {
        return Some(Region::AndhraPradesh);
    }

    let haystacks: Vec<String> = std::iter::once(id)
        .chain(colleges.iter().map(|college| college.to_ascii_lowercase()))
        .collect();
    let mentions = |markers: &[&str]| {
        haystacks
            .iter()
            .any(|text| markers.iter().any(|marker| text.contains(marker)))
    };

    match (mentions(TELANGANA_MARKERS), mentions(ANDHRA_MARKERS)) {
        (true, false) => Some(Region::Telangana),
        (false, true) => Some(Region::AndhraPradesh),
        _ => None,
    }
}
