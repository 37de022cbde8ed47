//! End-to-end tests for the tiered locator against the in-memory host

use futures::executor::block_on;
use locus_core::{FaultPlan, HostCall, LocationQuery, MemoryDocument, TextRange};
use locus_engine::{EngineConfig, HighlightStatus, LocateOutcome, Locator, MissReason, TierKind};

fn locate(doc: &MemoryDocument, query: &LocationQuery) -> LocateOutcome<TextRange> {
    block_on(Locator::new().locate(doc, query))
}

fn search_queries(doc: &MemoryDocument) -> Vec<String> {
    doc.calls()
        .iter()
        .filter_map(|call| call.query().map(str::to_string))
        .collect()
}

#[test]
fn test_exact_match_short_circuits() {
    let doc = MemoryDocument::from_text(
        "Definitions.\nThe \"Services\" are described in Schedule 1.\nFees are due monthly.",
    );
    let sentence = "The \"Services\" are described in Schedule 1.";
    let outcome = locate(&doc, &LocationQuery::sentence(sentence));

    assert_eq!(outcome.sentence_tier(), Some(TierKind::ExactInRegion));
    assert_eq!(outcome.highlight(), Some(HighlightStatus::NotRequested));
    assert_eq!(doc.selected_text().as_deref(), Some(sentence));

    // One search, no cross-region or punctuation-insensitive tier
    assert_eq!(doc.search_count(), 1);
    assert!(!doc
        .calls()
        .iter()
        .any(|call| matches!(call, HostCall::SearchAcrossRegions { .. })));
}

#[test]
fn test_host_is_synced_before_results_and_after_select() {
    let doc = MemoryDocument::from_text("Fees are due monthly.");
    let outcome = locate(&doc, &LocationQuery::sentence("Fees are due monthly."));
    assert!(outcome.is_located());

    let calls = doc.calls();
    assert_eq!(calls.len(), 4);
    assert!(calls[0].is_search());
    assert_eq!(calls[1], HostCall::Sync);
    assert_eq!(calls[2], HostCall::Select(TextRange::new(0, 21)));
    assert_eq!(calls[3], HostCall::Sync);
}

#[test]
fn test_curly_apostrophe_found_by_normalized_tier() {
    let doc = MemoryDocument::from_text("The Supplier's liability is capped at fees paid.");
    let outcome = locate(
        &doc,
        &LocationQuery::sentence("The Supplier\u{2019}s liability is capped at fees paid."),
    );

    assert_eq!(outcome.sentence_tier(), Some(TierKind::NormalizedInRegion));
    assert_eq!(
        search_queries(&doc),
        vec![
            "The Supplier\u{2019}s liability is capped at fees paid.".to_string(),
            "The Supplier's liability is capped at fees paid.".to_string(),
        ]
    );
    assert_eq!(
        doc.selected_text().as_deref(),
        Some("The Supplier's liability is capped at fees paid.")
    );
}

#[test]
fn test_sentence_split_by_new_paragraph_found_across_regions() {
    let doc = MemoryDocument::from_text("The term is one year.\nRenewal is automatic.");
    let outcome = locate(
        &doc,
        &LocationQuery::sentence("The term is one year. Renewal is automatic."),
    );

    assert_eq!(outcome.sentence_tier(), Some(TierKind::ExactAcrossRegions));
    // Tier 1 missed, tier 2 did not apply, tier 3 hit
    assert_eq!(doc.search_count(), 2);
    assert_eq!(
        doc.selected_text().as_deref(),
        Some("The term is one year.\nRenewal is automatic.")
    );
}

#[test]
fn test_split_sentence_with_curly_quotes_found_by_normalized_cross_region_tier() {
    let doc = MemoryDocument::from_text("The \"Term\" is one year.\nRenewal is automatic.");
    let outcome = locate(
        &doc,
        &LocationQuery::sentence("The \u{201C}Term\u{201D} is one year. Renewal is automatic."),
    );

    assert_eq!(
        outcome.sentence_tier(),
        Some(TierKind::NormalizedAcrossRegions)
    );
    assert_eq!(doc.search_count(), 4);
}

#[test]
fn test_missing_apostrophe_reaches_punctuation_tier() {
    let doc = MemoryDocument::from_text("Recitals.\nThe Supplier wont accept returns.");
    let outcome = locate(
        &doc,
        &LocationQuery::sentence("The Supplier won't accept returns."),
    );

    assert!(outcome.is_located());
    assert_eq!(outcome.sentence_tier(), Some(TierKind::IgnorePunctuation));
    assert_eq!(
        doc.selected_text().as_deref(),
        Some("The Supplier wont accept returns")
    );
    // Verbatim in-region, verbatim across regions, punctuation-insensitive
    assert_eq!(doc.search_count(), 3);
}

#[test]
fn test_dash_style_difference_reaches_punctuation_tier() {
    let doc = MemoryDocument::from_text("Any pre\u{2013}existing claim is excluded.");
    let outcome = locate(
        &doc,
        &LocationQuery::sentence("Any pre-existing claim is excluded."),
    );
    assert_eq!(outcome.sentence_tier(), Some(TierKind::IgnorePunctuation));
}

#[test]
fn test_first_occurrence_wins() {
    let doc = MemoryDocument::from_text("Notices must be in writing.\nNotices must be in writing.");
    let outcome = locate(&doc, &LocationQuery::sentence("Notices must be in writing."));
    assert_eq!(outcome.range(), Some(&TextRange::new(0, 27)));
}

#[test]
fn test_highlight_selected_inside_sentence_only() {
    let doc = MemoryDocument::from_text("The fees are payable monthly. Late fees accrue interest.");
    let outcome = locate(
        &doc,
        &LocationQuery::sentence("Late fees accrue interest.").with_highlight("fees"),
    );

    assert_eq!(
        outcome.highlight(),
        Some(HighlightStatus::Found(TierKind::HighlightExact))
    );
    assert_eq!(outcome.range(), Some(&TextRange::new(35, 39)));
    assert_eq!(doc.selection(), Some(TextRange::new(35, 39)));

    let sentence = TextRange::new(30, 56);
    for call in doc.calls().iter().skip(2) {
        if let HostCall::SearchInRegion { scope, .. } = call {
            assert_eq!(scope, &Some(sentence));
        }
        assert!(!matches!(call, HostCall::SearchAcrossRegions { .. }));
    }
}

#[test]
fn test_highlight_with_curly_quote_uses_normalized_tier() {
    let doc = MemoryDocument::from_text("Limits apply to the Supplier's liability.");
    let outcome = locate(
        &doc,
        &LocationQuery::sentence("Limits apply to the Supplier's liability.")
            .with_highlight("Supplier\u{2019}s liability"),
    );
    assert_eq!(
        outcome.highlight(),
        Some(HighlightStatus::Found(TierKind::HighlightNormalized))
    );
    assert_eq!(doc.selected_text().as_deref(), Some("Supplier's liability"));
}

#[test]
fn test_highlight_without_punctuation_uses_punctuation_tier() {
    let doc = MemoryDocument::from_text("We won't stop deliveries.");
    let outcome = locate(
        &doc,
        &LocationQuery::sentence("We won't stop deliveries.").with_highlight("wont stop"),
    );
    assert_eq!(
        outcome.highlight(),
        Some(HighlightStatus::Found(TierKind::HighlightIgnorePunctuation))
    );
    assert_eq!(doc.selected_text().as_deref(), Some("won't stop"));
}

#[test]
fn test_missing_highlight_degrades_to_sentence() {
    let doc = MemoryDocument::from_text("A penalty applies. Late fees accrue interest.");
    let outcome = locate(
        &doc,
        &LocationQuery::sentence("Late fees accrue interest.").with_highlight("penalty"),
    );

    assert!(outcome.is_located());
    assert!(outcome.is_partial());
    assert_eq!(outcome.highlight(), Some(HighlightStatus::Degraded));
    assert_eq!(outcome.range(), Some(&TextRange::new(19, 45)));
    assert_eq!(
        doc.selected_text().as_deref(),
        Some("Late fees accrue interest.")
    );
}

#[test]
fn test_empty_sentence_makes_no_host_calls() {
    let doc = MemoryDocument::from_text("Anything at all.");
    let outcome = locate(&doc, &LocationQuery::sentence("").with_highlight("Anything"));

    assert_eq!(outcome, LocateOutcome::NotFound(MissReason::EmptyQuery));
    assert!(doc.calls().is_empty());
    assert_eq!(doc.selection(), None);
}

#[test]
fn test_not_found_leaves_selection_untouched() {
    let doc = MemoryDocument::from_text("Fees are due monthly.");
    let previous = TextRange::new(0, 4);
    block_on(locus_core::DocumentHost::select(&doc, &previous)).unwrap();

    let outcome = locate(&doc, &LocationQuery::sentence("Nothing like this exists."));
    assert_eq!(outcome, LocateOutcome::NotFound(MissReason::Exhausted));
    assert_eq!(doc.selection(), Some(previous));
}

#[test]
fn test_long_highlight_is_truncated_consistently() {
    let doc = MemoryDocument::from_text("Payment is due within thirty days of invoice.")
        .with_max_query_len(20);
    let outcome = locate(
        &doc,
        &LocationQuery::sentence("Payment is due within thirty days of invoice.")
            .with_highlight("Payment is due within thirty days"),
    );

    // Verbatim and normalized tiers cannot take a 45 character query
    assert_eq!(outcome.sentence_tier(), Some(TierKind::IgnorePunctuation));
    assert_eq!(
        outcome.highlight(),
        Some(HighlightStatus::Found(TierKind::HighlightExact))
    );
    assert_eq!(doc.selected_text().as_deref(), Some("Payment is due withi"));

    let queries = search_queries(&doc);
    assert!(queries.iter().all(|q| q.chars().count() <= 20));
    assert_eq!(queries.last().map(String::as_str), Some("Payment is due withi"));
}

#[test]
fn test_truncated_highlight_used_by_every_highlight_tier() {
    let doc = MemoryDocument::from_text("Short clause with no match.").with_max_query_len(10);
    let outcome = locate(
        &doc,
        &LocationQuery::sentence("Short").with_highlight("unrelated words here"),
    );

    assert!(outcome.is_partial());
    let highlight_queries: Vec<_> = search_queries(&doc).into_iter().skip(1).collect();
    assert_eq!(highlight_queries, vec!["unrelated ", "unrelated "]);
}

#[test]
fn test_search_failure_falls_through_to_next_tier() {
    let doc = MemoryDocument::from_text("Fees are due monthly.")
        .with_faults(FaultPlan::new().fail_search(1));
    let outcome = locate(&doc, &LocationQuery::sentence("Fees are due monthly."));

    assert_eq!(outcome.sentence_tier(), Some(TierKind::ExactAcrossRegions));
    assert_eq!(doc.selected_text().as_deref(), Some("Fees are due monthly."));
}

#[test]
fn test_highlight_search_failure_falls_through() {
    let doc = MemoryDocument::from_text("We won't stop deliveries.")
        .with_faults(FaultPlan::new().fail_search(2));
    let outcome = locate(
        &doc,
        &LocationQuery::sentence("We won't stop deliveries.").with_highlight("stop"),
    );
    assert_eq!(
        outcome.highlight(),
        Some(HighlightStatus::Found(TierKind::HighlightIgnorePunctuation))
    );
    assert_eq!(doc.selected_text().as_deref(), Some("stop"));
}

#[test]
fn test_invalidated_context_is_a_miss() {
    let doc = MemoryDocument::from_text("Fees are due monthly.");
    doc.invalidate();
    let outcome = locate(&doc, &LocationQuery::sentence("Fees are due monthly."));
    assert_eq!(outcome, LocateOutcome::NotFound(MissReason::Exhausted));
}

#[test]
fn test_selection_failure_is_reported() {
    let doc = MemoryDocument::from_text("Fees are due monthly.")
        .with_faults(FaultPlan::new().fail_selects());
    let outcome = locate(
        &doc,
        &LocationQuery::sentence("Fees are due monthly.").with_highlight("monthly"),
    );
    assert_eq!(outcome, LocateOutcome::NotFound(MissReason::SelectionFailed));
    assert_eq!(doc.selection(), None);
}

#[test]
fn test_strict_locator_does_not_ignore_punctuation() {
    let doc = MemoryDocument::from_text("The Supplier wont accept returns.");
    let locator = Locator::with_config(EngineConfig::strict()).unwrap();
    let outcome = block_on(locator.locate(
        &doc,
        &LocationQuery::sentence("The Supplier won't accept returns."),
    ));
    assert_eq!(outcome, LocateOutcome::NotFound(MissReason::Exhausted));
}

#[test]
fn test_concurrent_locates_are_independent() {
    let first = MemoryDocument::from_text("Fees are due monthly.\nNotices must be in writing.");
    let second = MemoryDocument::from_text("The term is one year.");
    let locator = Locator::new();

    let q1 = LocationQuery::sentence("Notices must be in writing.").with_highlight("writing");
    let q2 = LocationQuery::sentence("The term is one year.");
    let q3 = LocationQuery::sentence("Fees are due monthly.");

    let (a, b, c) = block_on(async {
        futures::join!(
            locator.locate(&first, &q1),
            locator.locate(&second, &q2),
            locator.locate(&first, &q3),
        )
    });

    assert_eq!(a.range(), Some(&TextRange::new(41, 48)));
    assert_eq!(b.range(), Some(&TextRange::new(0, 21)));
    assert_eq!(c.range(), Some(&TextRange::new(0, 21)));
    assert_eq!(second.selected_text().as_deref(), Some("The term is one year."));
}

#[test]
fn test_signature_block_blank_paragraphs_stay_fast() {
    let doc = MemoryDocument::from_text(&format!("Signature:{}X", "\n".repeat(40)));
    let started = std::time::Instant::now();

    let outcome = locate(
        &doc,
        &LocationQuery::sentence(format!("Signature:{}Q", " ".repeat(20))),
    );

    assert_eq!(outcome, LocateOutcome::NotFound(MissReason::Exhausted));
    assert!(started.elapsed() < std::time::Duration::from_secs(2));
}
