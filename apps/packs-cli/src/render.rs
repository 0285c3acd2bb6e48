//! Console presentation of order plans.
//!
//! packs-core returns structured data only; every string the user sees is
//! built here.

use std::fmt::Write;

use packs_core::OrderPlan;

/// Renders one plan:
///
/// ```text
/// User ordered: 501 widgets.
///  500 x 1
///  250 x 1
/// ```
///
/// Only sizes actually shipped are listed, in catalog order. Exact
/// combinations follow when the plan carries them.
pub fn render_plan(plan: &OrderPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "User ordered: {} widgets.", plan.requested);
    for line in plan.selection.shipped() {
        let _ = writeln!(out, "{:>4} x {}", line.size, line.count);
    }

    if let Some(combinations) = &plan.combinations {
        let _ = writeln!(out, "Exact combinations: {}", combinations.len());
        for combination in combinations {
            let parts: Vec<String> = combination.iter().map(i64::to_string).collect();
            let _ = writeln!(out, "  {}", parts.join(" + "));
        }
    }

    out
}

/// Renders the banner printed before a scenario's orders.
///
/// ```text
/// Testing the 2 packages:
/// ======================================
/// 500
/// 250
/// ======================================
/// ```
pub fn render_catalog_banner(pack_sizes: &[i64]) -> String {
    const RULE: &str = "======================================";

    let mut out = String::new();
    let _ = writeln!(out, "Testing the {} packages:", pack_sizes.len());
    let _ = writeln!(out, "{RULE}");
    for size in pack_sizes {
        let _ = writeln!(out, "{size}");
    }
    let _ = writeln!(out, "{RULE}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use packs_core::{Catalog, DispatchOptions, Dispatcher};

    #[test]
    fn test_render_plan() {
        let plan = Dispatcher::new().plan(&Catalog::standard(), 501).unwrap();
        assert_eq!(
            render_plan(&plan),
            "User ordered: 501 widgets.\n 500 x 1\n 250 x 1\n"
        );
    }

    #[test]
    fn test_render_plan_with_combinations() {
        let options = DispatchOptions {
            include_combinations: true,
            search_budget: None,
        };
        let catalog = Catalog::new(vec![500, 251, 250]).unwrap();
        let plan = Dispatcher::with_options(options)
            .plan(&catalog, 751)
            .unwrap();
        assert_eq!(
            render_plan(&plan),
            "User ordered: 751 widgets.\n 500 x 1\n 251 x 1\n\
             Exact combinations: 2\n  250 + 250 + 251\n  251 + 500\n"
        );
    }

    #[test]
    fn test_render_catalog_banner() {
        let banner = render_catalog_banner(&[500, 250]);
        assert!(banner.starts_with("Testing the 2 packages:\n"));
        assert!(banner.contains("\n500\n250\n"));
    }
}
