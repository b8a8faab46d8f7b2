//! Output rendering for search results.

use std::io::Write;

use ricefinder_products::{FilterCriteria, Product, RegionFilter, SearchSession, SearchState};

pub const NO_RESULTS_MESSAGE: &str = "条件に合う商品が見つかりませんでした";

/// Criteria summary, result header and one block per product.
pub fn text(session: &SearchSession, out: &mut impl Write) -> std::io::Result<()> {
    criteria_summary(session.criteria(), out)?;

    match session.state() {
        SearchState::NotSearched => {}
        SearchState::NoMatches => {
            writeln!(out, "検索結果 (0件)")?;
            writeln!(out, "{NO_RESULTS_MESSAGE}")?;
        }
        SearchState::Matches(products) => {
            writeln!(out, "検索結果 ({}件)", products.len())?;
            for product in products {
                product_block(product, out)?;
            }
        }
    }
    Ok(())
}

fn criteria_summary(criteria: &FilterCriteria, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "価格帯: {}円 - {}円 / kg",
        criteria.min_price, criteria.max_price
    )?;
    writeln!(out, "産地: {}", criteria.region)?;
    if criteria.subsidy_only {
        writeln!(out, "ふるさと納税のみ")?;
    }
    writeln!(out)
}

fn product_block(product: &Product, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", product.name())?;
    writeln!(
        out,
        "  価格: {}円/kg  容量: {}",
        product.price_per_unit(),
        product.package_volume()
    )?;
    writeln!(out, "  産地: {}", product.region())?;
    if product.is_subsidy_eligible() {
        writeln!(out, "  [ふるさと納税]")?;
    }
    Ok(())
}

/// Matching products as a JSON array of catalog records.
pub fn json(session: &SearchSession, out: &mut impl Write) -> anyhow::Result<()> {
    let products: &[Product] = match session.state() {
        SearchState::Matches(products) => products,
        SearchState::NotSearched | SearchState::NoMatches => &[],
    };
    serde_json::to_writer_pretty(&mut *out, products)?;
    writeln!(out)?;
    Ok(())
}

/// The sentinel first, then every prefecture as `label<TAB>slug`.
pub fn regions(out: &mut impl Write) -> std::io::Result<()> {
    for choice in RegionFilter::choices() {
        match choice {
            RegionFilter::All => writeln!(out, "{}\tall", choice)?,
            RegionFilter::Only(p) => writeln!(out, "{}\t{}", p.label(), p.slug())?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ricefinder_products::{CatalogProvider, StaticCatalog};

    fn render_text(session: &SearchSession) -> String {
        let mut buf = Vec::new();
        text(session, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn not_searched_prints_only_summary() {
        let session = SearchSession::new(StaticCatalog.load().unwrap());
        let out = render_text(&session);

        assert!(out.starts_with("価格帯: 200円 - 1000円 / kg\n産地: 全国\n"));
        assert!(!out.contains("検索結果"));
    }

    #[test]
    fn subsidy_tag_only_for_eligible_products() {
        let mut session = SearchSession::new(StaticCatalog.load().unwrap());
        session.search();
        let out = render_text(&session);

        assert!(out.contains("検索結果 (5件)"));
        assert_eq!(out.matches("[ふるさと納税]").count(), 2);
        assert!(out.contains("コシヒカリ\n  価格: 450円/kg  容量: 5kg\n  産地: 新潟県\n"));
    }

    #[test]
    fn regions_list_has_sentinel_and_47_prefectures() {
        let mut buf = Vec::new();
        regions(&mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 48);
        assert_eq!(lines[0], "全国\tall");
        assert_eq!(lines[1], "北海道\thokkaido");
    }
}
