// tests/images.rs
use emico_datasheet::specs::images;

const PAGE: &str = include_str!("fixtures/product_de.html");

#[test]
fn trailing_noise_collapses_to_one_url() {
    let body = r#"
        <img src="https://intellishop.sirv.com/emico/a.jpg?w=100">
        <img src="https://intellishop.sirv.com/emico/a.jpg?w=900&q=75">
    "#;
    assert_eq!(images::collect_image_urls(body), vec!["https://intellishop.sirv.com/emico/a.jpg"]);
}

#[test]
fn fixture_images_are_deduplicated_in_page_order() {
    let urls = images::collect_image_urls(PAGE);
    assert_eq!(
        urls,
        vec![
            "https://intellishop.sirv.com/emico/10045_01.jpg",
            "https://intellishop.sirv.com/emico/10045_02.jpg",
            "https://intellishop.sirv.com/emico/10045_zg.jpg",
            "https://intellishop.sirv.com/emico/10045_03.png",
            "https://intellishop.sirv.com/emico/10045_04.jpg",
        ]
    );
}

#[test]
fn drawing_suffix_decides_the_role() {
    assert!(images::is_drawing_image("https://intellishop.sirv.com/emico/10045_zg.jpg"));
    assert!(images::is_drawing_image("https://intellishop.sirv.com/emico/10045_zg_2.PNG"));
    assert!(!images::is_drawing_image("https://intellishop.sirv.com/emico/10045_foo.jpg"));
}

#[test]
fn at_most_three_product_images_and_one_drawing() {
    let urls = images::collect_image_urls(PAGE);
    assert_eq!(
        images::product_images(&urls),
        vec![
            "https://intellishop.sirv.com/emico/10045_01.jpg",
            "https://intellishop.sirv.com/emico/10045_02.jpg",
            "https://intellishop.sirv.com/emico/10045_03.png",
        ]
    );
    assert_eq!(images::drawing_image(&urls), Some("https://intellishop.sirv.com/emico/10045_zg.jpg"));
}
