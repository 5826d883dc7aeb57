// src/formatting/render.rs
//! Plain-text rendering of the list, detail, cart and settings views.

use super::view_model::CanonicalListingView;
use crate::constants::NOT_AVAILABLE;
use crate::error::AppError;
use crate::model::SearchLink;
use std::fmt::Write;

const RULE: &str = "────────────────────────────────────────";

/// One-listing summary used by the buildings grid and the cart.
pub fn render_card(view: &CanonicalListingView) -> Result<String, AppError> {
    let mut out = String::new();

    let id = view
        .id
        .map(|id| format!("#{} ", id))
        .unwrap_or_default();
    write!(out, "{}{}", id, view.title)?;
    if let Some(label) = view.category_label() {
        write!(out, " [{}]", label)?;
    }
    writeln!(out)?;
    writeln!(out, "    {}", view.price)?;
    match view.main_image() {
        Some(url) => writeln!(out, "    Photo: {}", url)?,
        None => writeln!(out, "    No photo")?,
    }

    Ok(out)
}

/// The buildings grid.
pub fn render_building_list(views: &[CanonicalListingView]) -> Result<String, AppError> {
    let mut out = String::new();

    if views.is_empty() {
        writeln!(out, "No buildings yet")?;
        writeln!(
            out,
            "Your database is empty. Run the scraping backend to collect listings."
        )?;
        return Ok(out);
    }

    let noun = if views.len() == 1 { "building" } else { "buildings" };
    writeln!(out, "Buildings ({} {})", views.len(), noun)?;
    writeln!(out, "{}", RULE)?;
    for view in views {
        out.push_str(&render_card(view)?);
    }

    Ok(out)
}

/// Full detail page of a single building.
pub fn render_detail(view: &CanonicalListingView) -> Result<String, AppError> {
    let mut out = String::new();

    // Header
    write!(out, "{}", view.title)?;
    if let Some(label) = view.category_label() {
        write!(out, " [{}]", label)?;
    }
    writeln!(out)?;
    if let Some(line) = view.location.summary_line() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", view.price)?;
    if let Some(per_area) = &view.price_per_area {
        writeln!(out, "{} / m²", per_area)?;
    }
    if let Some(url) = &view.original_url {
        writeln!(out, "Original listing: {}", url)?;
    }

    // Gallery
    section(&mut out, "Photos")?;
    match view.images.split_first() {
        None => writeln!(out, "No photos available")?,
        Some((main, rest)) => {
            writeln!(out, "Main: {}", main)?;
            for (idx, url) in rest.iter().enumerate() {
                writeln!(out, "Photo {}: {}", idx + 2, url)?;
            }
        }
    }

    // Key facts
    section(&mut out, "Key facts")?;
    let location = &view.location;
    let facts = [
        ("Category", view.category_label().map(str::to_string)),
        ("Area", Some(view.area.clone())),
        ("Price", Some(view.price.clone())),
        (
            "Price per m²",
            view.price_per_area.as_ref().map(|p| format!("{} / m²", p)),
        ),
        ("City", location.city.clone()),
        ("Postal code", location.postal_code.clone()),
        ("Department", location.department.clone()),
        ("Region", location.region.clone()),
    ];
    for (label, value) in facts {
        writeln!(
            out,
            "{:<14}{}",
            label,
            value.as_deref().unwrap_or(NOT_AVAILABLE)
        )?;
    }

    // Metrics
    section(&mut out, "Rental & tax metrics")?;
    for metric in &view.metrics {
        write!(out, "{:<14}{}", metric.title, metric.value)?;
        if let Some(score) = &metric.score {
            write!(out, "  (score: {} / 10)", score)?;
        }
        writeln!(out)?;
    }

    // Apartments, residential only
    if !view.apartment_sizes.is_empty() {
        section(&mut out, "Apartments in this building")?;
        for (idx, size) in view.apartment_sizes.iter().enumerate() {
            writeln!(out, "{:>3}. {} m²", idx + 1, size)?;
        }
    }

    section(&mut out, "Amenities")?;
    match &view.amenities {
        Some(items) => {
            for item in items {
                writeln!(out, "- {}", item)?;
            }
        }
        None => writeln!(out, "No amenities information.")?,
    }

    section(&mut out, "Description")?;
    match &view.description {
        Some(text) => writeln!(out, "{}", text)?,
        None => writeln!(out, "No description available.")?,
    }

    Ok(out)
}

/// The cart page.
pub fn render_cart(views: &[CanonicalListingView]) -> Result<String, AppError> {
    let mut out = String::new();

    if views.is_empty() {
        writeln!(out, "Your cart is empty")?;
        writeln!(
            out,
            "Add buildings to your cart from the building detail page."
        )?;
        return Ok(out);
    }

    writeln!(out, "Shopping cart ({} listings)", views.len())?;
    writeln!(out, "{}", RULE)?;
    for view in views {
        out.push_str(&render_card(view)?);
    }

    Ok(out)
}

/// Configured search links as a two-column table.
pub fn render_search_links(links: &[SearchLink]) -> Result<String, AppError> {
    let mut out = String::new();

    if links.is_empty() {
        writeln!(out, "No search links yet. Add one with `settings add`.")?;
        return Ok(out);
    }

    let width = links.iter().map(|l| l.link.len()).max().unwrap_or(0).max(3);
    writeln!(out, "{:<width$}  Source", "URL", width = width)?;
    for link in links {
        writeln!(out, "{:<width$}  {}", link.link, link.source, width = width)?;
    }

    Ok(out)
}

pub fn render_sources(sources: &[String]) -> Result<String, AppError> {
    let mut out = String::new();
    if sources.is_empty() {
        writeln!(out, "No sources configured on the backend.")?;
    }
    for source in sources {
        writeln!(out, "{}", source)?;
    }
    Ok(out)
}

fn section(out: &mut String, title: &str) -> Result<(), AppError> {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))?;
    Ok(())
}
