use crate::metaheuristic::Tour;

/// Maps a city index to a spreadsheet-column style label: 0 is `A`, 25 is `Z`, 26 is `AA`.
pub fn city_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut rest = index + 1;
    while rest > 0 {
        let digit = (rest - 1) % 26;
        label.push(b'A' + digit as u8);
        rest = (rest - 1) / 26;
    }
    label.reverse();

    String::from_utf8_lossy(&label).into_owned()
}

pub fn route_labels(tour: &Tour) -> Vec<String> {
    tour.iter_cities().map(|&city| city_label(city)).collect()
}
