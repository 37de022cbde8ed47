//! Tier execution against a host
//!
//! Host failures are logged and treated as misses; they never abort the
//! chain. Tiers run strictly one after another, since each depends on the
//! previous one having missed.

use crate::plan::TierPlan;
use crate::tier::{Span, Tier, TierKind};
use locus_core::{DocumentHost, SearchScope};
use log::{debug, warn};

/// Run one tier with a prepared query; first hit in document order wins
pub(crate) async fn run_tier<H>(
    host: &H,
    scope: SearchScope<'_, H::Range>,
    tier: &Tier,
    query: &str,
) -> Option<H::Range>
where
    H: DocumentHost + ?Sized,
{
    let search = match tier.span {
        Span::SingleRegion => host.search_in_region(scope, query, tier.options).await,
        Span::AcrossRegions => host.search_across_regions(query, tier.options).await,
    };
    let hits = match search {
        Ok(hits) => hits,
        Err(err) => {
            warn!("tier {} search failed: {err}", tier.kind);
            return None;
        }
    };
    if let Err(err) = host.sync().await {
        warn!("tier {} sync failed: {err}", tier.kind);
        return None;
    }

    debug!("tier {} returned {} hit(s)", tier.kind, hits.len());
    hits.into_iter().next()
}

/// Try the tiers of `plan` in order and stop at the first hit
pub(crate) async fn first_hit<H>(
    host: &H,
    scope: SearchScope<'_, H::Range>,
    plan: &TierPlan,
    text: &str,
    ceiling: usize,
) -> Option<(TierKind, H::Range)>
where
    H: DocumentHost + ?Sized,
{
    for tier in plan {
        let Some(query) = tier.form.prepare(text, ceiling) else {
            debug!("tier {} does not apply, skipping", tier.kind);
            continue;
        };
        debug!("trying tier {} ({} chars)", tier.kind, query.chars().count());
        if let Some(range) = run_tier(host, scope, tier, &query).await {
            return Some((tier.kind, range));
        }
    }
    None
}

/// Select `range` and flush; `false` if the host refused
pub(crate) async fn select<H>(host: &H, range: &H::Range) -> bool
where
    H: DocumentHost + ?Sized,
{
    if let Err(err) = host.select(range).await {
        warn!("select failed: {err}");
        return false;
    }
    if let Err(err) = host.sync().await {
        warn!("sync after select failed: {err}");
        return false;
    }
    true
}
