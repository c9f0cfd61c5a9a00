/// Fixed GPS points (Seoul downtown), formatted `<lat>;<lon>`.
pub const GPS_LOCATIONS: [&str; 4] = [
    "37.5665;126.9780", // City Hall
    "37.5172;127.0473", // Gangnam station
    "37.5509;126.9882", // Myeongdong
    "37.5512;126.9882", // Jongno
];

pub fn is_known_location(s: &str) -> bool {
    GPS_LOCATIONS.contains(&s)
}
