use super::*;

fn inception() -> Movie {
    Movie {
        id: 101,
        title: "Inception".to_owned(),
        image: "https://img/inception.jpg".to_owned(),
        rating: 8.8,
        genre: "Sci-Fi".to_owned(),
        duration: "2h 28m".to_owned(),
        year: 2010,
    }
}

#[test]
fn price_has_two_decimals() {
    assert_eq!(format_price(3.5), "$3.50");
    assert_eq!(format_price(4.99), "$4.99");
}

#[test]
fn meta_joins_year_genre_duration() {
    assert_eq!(card_meta(&inception()), "2010 · Sci-Fi · 2h 28m");
}

#[test]
fn rating_has_one_decimal() {
    assert_eq!(rating_label(8.8), "★ 8.8");
    assert_eq!(rating_label(4.0), "★ 4.0");
}
