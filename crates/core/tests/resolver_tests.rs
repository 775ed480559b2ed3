//! Date resolution behaviour across realistic chapter links

use chapterfeed_core::{resolve_date, ChapterEntry, DateResolver, UrlDateResolver};

#[test]
fn test_resolves_every_month() {
    let expected = [
        "Mon, 01 Jan 2018", "Thu, 01 Feb 2018", "Thu, 01 Mar 2018", "Sun, 01 Apr 2018",
        "Tue, 01 May 2018", "Fri, 01 Jun 2018", "Sun, 01 Jul 2018", "Wed, 01 Aug 2018",
        "Sat, 01 Sep 2018", "Mon, 01 Oct 2018", "Thu, 01 Nov 2018", "Sat, 01 Dec 2018",
    ];

    for (index, prefix) in expected.iter().enumerate() {
        let link = format!("https://example.com/2018/{:02}/01/chapter/", index + 1);
        let date = resolve_date(&link).expect("month should resolve");
        assert_eq!(date.to_rfc822(), format!("{prefix} 00:00:00 +0000"));
    }
}

#[test]
fn test_entries_resolve_through_trait() {
    let resolver = UrlDateResolver;
    let dated = ChapterEntry::new("Chapter 1", "/2018/01/01/a/").expect("valid entry");
    let undated = ChapterEntry::new("Glossary", "/glossary/").expect("valid entry");

    assert_eq!(
        resolver.resolve(dated.link()).map(|d| d.to_rfc822()),
        Some("Mon, 01 Jan 2018 00:00:00 +0000".to_string())
    );
    assert!(resolver.resolve(undated.link()).is_none());
}

#[test]
fn test_query_string_dates_count() {
    let date = resolve_date("https://example.com/?p=/2020/12/31/").expect("dated");
    assert_eq!(date.to_rfc822(), "Thu, 31 Dec 2020 00:00:00 +0000");
}

#[test]
fn test_non_ascii_digits_do_not_match() {
    assert!(resolve_date("https://example.com/２０１８/04/10/x/").is_none());
}
