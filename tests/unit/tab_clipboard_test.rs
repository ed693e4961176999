use tabclip::commands::{TabClipboard, RESTORE_ON_DEMAND_PREF};
use tabclip::host::clipboard::InMemoryClipboard;
use tabclip::host::prefs::{PrefStore, PrefStoreTrait};
use tabclip::host::session_store::InMemorySessionStore;
use tabclip::host::tab_strip::{InMemoryTabStrip, TabStripTrait};
use tabclip::platform::LineSeparator;

type Commands = TabClipboard<InMemoryClipboard, InMemoryTabStrip, PrefStore, InMemorySessionStore>;

fn commands(clipboard: InMemoryClipboard, strip: InMemoryTabStrip, prefs: PrefStore) -> Commands {
    TabClipboard::new(
        clipboard,
        strip,
        prefs,
        InMemorySessionStore::new(),
        LineSeparator::Lf,
    )
}

#[test]
fn test_copy_single_context_tab() {
    let mut strip = InMemoryTabStrip::with_urls(&["https://a.com", "https://b.com/x"]);
    strip.set_context(1).unwrap();
    let mut commands = commands(InMemoryClipboard::new(), strip, PrefStore::in_memory());

    assert_eq!(commands.copy().unwrap(), 1);
    assert_eq!(commands.clipboard().contents(), Some("https://b.com/x"));
}

#[test]
fn test_copy_multiselection_joins_urls() {
    let mut strip = InMemoryTabStrip::with_urls(&["https://a.com", "https://b.com/x"]);
    strip.select(0).unwrap();
    strip.select(1).unwrap();
    let mut commands = commands(InMemoryClipboard::new(), strip, PrefStore::in_memory());

    assert_eq!(commands.copy().unwrap(), 2);
    assert_eq!(
        commands.clipboard().contents(),
        Some("https://a.com\nhttps://b.com/x")
    );
}

#[test]
fn test_copy_with_no_context_tab_copies_nothing() {
    let mut commands = commands(
        InMemoryClipboard::new(),
        InMemoryTabStrip::new(),
        PrefStore::in_memory(),
    );
    assert_eq!(commands.copy().unwrap(), 0);
    assert_eq!(commands.clipboard().contents(), None);
}

#[test]
fn test_cut_removes_copied_tabs_and_saves_session() {
    let mut strip =
        InMemoryTabStrip::with_urls(&["https://a.com", "https://b.com", "https://c.com"]);
    strip.select(0).unwrap();
    strip.select(1).unwrap();
    let mut commands = commands(InMemoryClipboard::new(), strip, PrefStore::in_memory());

    assert_eq!(commands.cut().unwrap(), 2);
    assert_eq!(commands.tabs().urls(), vec!["https://c.com"]);
    assert_eq!(
        commands.clipboard().contents(),
        Some("https://a.com\nhttps://b.com")
    );

    let (_, _, _, session) = commands.into_parts();
    assert_eq!(session.save_count(), 1);
}

#[test]
fn test_cut_survives_unsupported_session_store() {
    let strip = InMemoryTabStrip::with_urls(&["https://a.com", "https://b.com"]);
    let mut commands = TabClipboard::new(
        InMemoryClipboard::new(),
        strip,
        PrefStore::in_memory(),
        InMemorySessionStore::unsupported(),
        LineSeparator::Lf,
    );
    // Session persistence absence degrades gracefully
    assert_eq!(commands.cut().unwrap(), 1);
    assert_eq!(commands.tabs().tab_count(), 1);
}

#[test]
fn test_paste_eager_inserts_behind_context_in_match_order() {
    // Context tab at position 3, two matches -> positions 4 and 5.
    let mut strip = InMemoryTabStrip::with_urls(&[
        "https://t0.com",
        "https://t1.com",
        "https://t2.com",
        "https://t3.com",
        "https://t4.com",
    ]);
    strip.set_context(3).unwrap();
    let clipboard = InMemoryClipboard::with_text("https://x.com\nhttps://y.com");
    let mut commands = commands(clipboard, strip, PrefStore::in_memory());

    assert_eq!(commands.paste(), 2);
    let tabs = commands.tabs().tabs();
    assert_eq!(tabs[4].url, "https://x.com");
    assert_eq!(tabs[5].url, "https://y.com");
    assert!(tabs[4].pending_state.is_none());
    assert!(tabs[5].pending_state.is_none());
    assert_eq!(tabs[6].url, "https://t4.com");
}

#[test]
fn test_paste_on_demand_creates_placeholders() {
    // Same positions as the eager case, but the tabs carry lazy state.
    let mut prefs = PrefStore::in_memory();
    prefs.set_bool(RESTORE_ON_DEMAND_PREF, true).unwrap();
    let mut strip = InMemoryTabStrip::with_urls(&[
        "https://t0.com",
        "https://t1.com",
        "https://t2.com",
        "https://t3.com",
        "https://t4.com",
    ]);
    strip.set_context(3).unwrap();
    let clipboard = InMemoryClipboard::with_text("https://x.com\nhttps://y.com");
    let mut commands = commands(clipboard, strip, prefs);

    assert_eq!(commands.paste(), 2);
    let tabs = commands.tabs().tabs();
    for (index, url) in [(4, "https://x.com"), (5, "https://y.com")] {
        let state = tabs[index].pending_state.as_ref().unwrap();
        assert_eq!(state.url, url);
        assert_eq!(state.title, url);
    }
}

#[test]
fn test_paste_defaults_to_eager_when_pref_absent() {
    let strip = InMemoryTabStrip::with_urls(&["https://a.com"]);
    let clipboard = InMemoryClipboard::with_text("https://x.com");
    let mut commands = commands(clipboard, strip, PrefStore::in_memory());

    assert_eq!(commands.paste(), 1);
    assert!(commands.tabs().tabs()[1].pending_state.is_none());
}

#[test]
fn test_paste_with_empty_clipboard_opens_no_tabs() {
    // The read failure is logged and swallowed; nothing escapes the caller.
    let strip = InMemoryTabStrip::with_urls(&["https://a.com"]);
    let mut commands = commands(InMemoryClipboard::new(), strip, PrefStore::in_memory());

    assert_eq!(commands.paste(), 0);
    assert_eq!(commands.tabs().tab_count(), 1);
}

#[test]
fn test_paste_with_no_urls_opens_no_tabs() {
    let strip = InMemoryTabStrip::with_urls(&["https://a.com"]);
    let clipboard = InMemoryClipboard::with_text("just some prose, no links");
    let mut commands = commands(clipboard, strip, PrefStore::in_memory());

    assert_eq!(commands.paste(), 0);
    assert_eq!(commands.tabs().tab_count(), 1);

    let (_, _, _, session) = commands.into_parts();
    assert_eq!(session.save_count(), 0);
}

#[test]
fn test_paste_into_empty_strip_appends_in_order() {
    let clipboard = InMemoryClipboard::with_text("https://x.com\nhttps://y.com");
    let mut commands = commands(clipboard, InMemoryTabStrip::new(), PrefStore::in_memory());

    assert_eq!(commands.paste(), 2);
    assert_eq!(commands.tabs().urls(), vec!["https://x.com", "https://y.com"]);
}

#[test]
fn test_cut_then_paste_restores_cut_tabs() {
    let mut strip =
        InMemoryTabStrip::with_urls(&["https://a.com", "https://b.com", "https://c.com"]);
    strip.select(0).unwrap();
    strip.select(1).unwrap();
    let mut commands = commands(InMemoryClipboard::new(), strip, PrefStore::in_memory());

    commands.cut().unwrap();
    assert_eq!(commands.paste(), 2);
    // Context tab was cut, so pasted tabs land behind the end of the strip
    assert_eq!(
        commands.tabs().urls(),
        vec!["https://c.com", "https://a.com", "https://b.com"]
    );
}
