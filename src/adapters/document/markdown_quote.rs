//! Markdown quote renderer.
//!
//! Produces a self-contained markdown document for a submitted quote:
//! header, event, stall design, detailed breakdown, and summary.

use std::collections::BTreeSet;
use std::fmt::Write;

use super::currency::{format_amount, format_percent};
use crate::domain::foundation::{Currency, DomainError, ErrorCode};
use crate::domain::quote::Quote;
use crate::domain::stall::{AreaUnit, CostBreakdown, StallDesignSelection};
use crate::ports::{QuoteRenderer, RenderedDocument};

/// Renders quotes as markdown in a fixed currency.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownQuoteRenderer {
    currency: Currency,
}

impl MarkdownQuoteRenderer {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    fn money(&self, amount: f64) -> String {
        format_amount(amount, self.currency)
    }

    fn header(&self, out: &mut String, quote: &Quote) -> std::fmt::Result {
        let contact = quote.contact();
        writeln!(out, "# Exhibition Cost Quote {}", quote.reference())?;
        writeln!(out)?;
        writeln!(out, "**Prepared for:** {} ({})", contact.company, contact.contact_name)?;
        writeln!(out, "**Email:** {}", contact.email)?;
        if let Some(phone) = &contact.phone {
            writeln!(out, "**Phone:** {}", phone)?;
        }
        writeln!(
            out,
            "**Date:** {}",
            quote.created_at().as_datetime().format("%Y-%m-%d")
        )?;
        writeln!(out, "**Currency:** {}", self.currency)?;
        writeln!(out)
    }

    fn event(&self, out: &mut String, quote: &Quote) -> std::fmt::Result {
        let event = &quote.form().event;
        writeln!(out, "## Event")?;
        writeln!(out)?;
        writeln!(out, "- **Name:** {}", or_dash(&event.event_name))?;
        writeln!(out, "- **City:** {}", or_dash(&event.city))?;
        if let Some(venue) = &event.venue {
            writeln!(out, "- **Venue:** {}", venue)?;
        }
        if let (Some(start), Some(end)) = (event.start_date, event.end_date) {
            writeln!(
                out,
                "- **Dates:** {} to {} ({} days)",
                start,
                end,
                event.duration_days()
            )?;
        }
        if event.team_size > 0 {
            writeln!(out, "- **Team size:** {}", event.team_size)?;
        }
        if let Some(flight) = &quote.form().flight {
            writeln!(
                out,
                "- **Flight:** {} × {} travellers",
                flight.airline, flight.travellers
            )?;
        }
        if let Some(hotel) = &quote.form().hotel {
            writeln!(
                out,
                "- **Hotel:** {}, {} rooms × {} nights",
                hotel.name, hotel.rooms, hotel.nights
            )?;
        }
        writeln!(out)
    }

    fn stall(&self, out: &mut String, stall: &StallDesignSelection) -> std::fmt::Result {
        let unit = match stall.area_unit {
            AreaUnit::Sqft => "sqft",
            _ => "sqm",
        };
        writeln!(out, "## Stall Design")?;
        writeln!(out)?;
        writeln!(out, "| Option | Selection |")?;
        writeln!(out, "|--------|-----------|")?;
        writeln!(out, "| Area | {} {} |", stall.area, unit)?;
        writeln!(out, "| Booth type | {} |", humanize(stall.booth_type.as_str()))?;
        writeln!(out, "| Position | {} |", humanize(stall.booth_position.as_str()))?;
        writeln!(out, "| Walls | {} |", humanize(stall.wall_type.as_str()))?;
        writeln!(out, "| Flooring | {} |", humanize(stall.flooring.as_str()))?;
        writeln!(out, "| Ceiling | {} |", humanize(stall.ceiling.as_str()))?;
        writeln!(out, "| Furniture | {} |", humanize(stall.furniture_type.as_str()))?;

        let sets: [(&str, &BTreeSet<String>); 6] = [
            ("Rooms", &stall.additional_rooms),
            ("Branding", &stall.branding_elements),
            ("Displays", &stall.digital_displays),
            ("Furniture items", &stall.furniture_items),
            ("Lighting", &stall.lighting_type),
            ("Extras", &stall.extras),
        ];
        for (label, set) in sets {
            if !set.is_empty() {
                let joined: Vec<String> = set.iter().map(|s| humanize(s)).collect();
                writeln!(out, "| {} | {} |", label, joined.join(", "))?;
            }
        }
        writeln!(out)
    }

    fn breakdown(&self, out: &mut String, breakdown: &CostBreakdown) -> std::fmt::Result {
        writeln!(out, "## Detailed Breakdown")?;
        writeln!(out)?;
        for (label, category) in breakdown.categories() {
            writeln!(out, "### {} ({})", label, self.money(category.subtotal))?;
            writeln!(out)?;
            for (item, cost) in &category.items {
                writeln!(out, "- {}: {}", humanize(item), self.money(*cost))?;
            }
            writeln!(out)?;
        }
        writeln!(out, "- **Subtotal:** {}", self.money(breakdown.subtotal))?;
        writeln!(
            out,
            "- **Position premium (×{:.2}):** {}",
            breakdown.position_multiplier,
            self.money(breakdown.position_premium)
        )?;
        writeln!(out, "- **Stall total:** {}", self.money(breakdown.total_cost))?;
        if let Some(per_sqm) = breakdown.cost_per_sqm {
            writeln!(out, "- **Per sqm:** {}", self.money(per_sqm))?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "*The detailed breakdown is indicative; the summary below is the quoted total.*"
        )?;
        writeln!(out)
    }

    fn summary(&self, out: &mut String, quote: &Quote) -> std::fmt::Result {
        let summary = &quote.estimate().summary;
        let pct = |key: &str| format_percent(summary.percentages.get(key).copied().unwrap_or(0.0));

        writeln!(out, "## Summary")?;
        writeln!(out)?;
        writeln!(out, "| Component | Amount | Share |")?;
        writeln!(out, "|-----------|-------:|------:|")?;
        let rows = [
            ("Stall fabrication", summary.stall_fabrication_cost, "stall_fabrication"),
            ("Space rental", summary.space_cost, "space"),
            ("Travel & hotel", summary.travel_hotel_cost, "travel_hotel"),
            ("Marketing", summary.marketing_cost, "marketing"),
            ("Logistics", summary.logistics_cost, "logistics"),
        ];
        for (label, amount, key) in rows {
            writeln!(out, "| {} | {} | {} |", label, self.money(amount), pct(key))?;
        }
        writeln!(
            out,
            "| **Total** | **{}** | 100.0% |",
            self.money(quote.total_cost())
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "Fabrication rate: {} per sqm.",
            self.money(summary.fabrication_rate)
        )?;
        if let Some(notes) = quote.notes() {
            writeln!(out)?;
            writeln!(out, "## Notes")?;
            writeln!(out)?;
            writeln!(out, "{}", notes)?;
        }
        Ok(())
    }
}

impl QuoteRenderer for MarkdownQuoteRenderer {
    fn render(&self, quote: &Quote) -> Result<RenderedDocument, DomainError> {
        let mut body = String::new();
        self.header(&mut body, quote)
            .and_then(|_| self.event(&mut body, quote))
            .and_then(|_| self.stall(&mut body, &quote.form().stall))
            .and_then(|_| self.breakdown(&mut body, &quote.estimate().stall_breakdown))
            .and_then(|_| self.summary(&mut body, quote))
            .map_err(|e| DomainError::new(ErrorCode::RenderFailed, e.to_string()))?;

        Ok(RenderedDocument {
            content_type: "text/markdown; charset=utf-8".to_string(),
            file_name: format!("{}.md", quote.reference()),
            body,
        })
    }
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// `wall_cost` → `Wall`, `led_tv_55` → `Led tv 55`.
fn humanize(key: &str) -> String {
    let trimmed = key.strip_suffix("_cost").unwrap_or(key);
    let spaced = trimmed.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
