use tabclip::codec::encoder::encode_tabs;
use tabclip::platform::LineSeparator;
use tabclip::types::tab::Tab;

fn tab(url: &str) -> Tab {
    Tab {
        id: format!("id-{}", url),
        url: url.to_string(),
        title: url.to_string(),
        pending_state: None,
    }
}

#[test]
fn test_encode_two_tabs_with_lf() {
    let tabs = vec![tab("https://a.com"), tab("https://b.com/x")];
    assert_eq!(
        encode_tabs(&tabs, LineSeparator::Lf),
        "https://a.com\nhttps://b.com/x"
    );
}

#[test]
fn test_encode_with_crlf() {
    let tabs = vec![tab("https://a.com"), tab("https://b.com/x")];
    assert_eq!(
        encode_tabs(&tabs, LineSeparator::CrLf),
        "https://a.com\r\nhttps://b.com/x"
    );
}

#[test]
fn test_encode_empty_input_is_empty_string() {
    assert_eq!(encode_tabs(&[], LineSeparator::Lf), "");
    assert_eq!(encode_tabs(&[], LineSeparator::CrLf), "");
}

#[test]
fn test_encode_preserves_order_and_duplicates() {
    let urls = [
        "https://e.com",
        "https://a.com",
        "https://c.com",
        "https://a.com",
        "https://b.com",
    ];
    let tabs: Vec<Tab> = urls.iter().map(|u| tab(u)).collect();
    let encoded = encode_tabs(&tabs, LineSeparator::Lf);
    let split: Vec<&str> = encoded.split('\n').collect();
    assert_eq!(split, urls);
}

#[test]
fn test_encode_does_not_validate_urls() {
    let tabs = vec![tab("about:blank"), tab(""), tab("https://ok.example")];
    assert_eq!(
        encode_tabs(&tabs, LineSeparator::Lf),
        "about:blank\n\nhttps://ok.example"
    );
}
