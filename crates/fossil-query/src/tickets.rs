//! Ticket pricing and receipts.
//!
//! A [`TicketInfo`] is validated against the [`TicketData`] price table one
//! dimension at a time: ticket type, then entrant type, then each extra in
//! the order given. The first invalid dimension short-circuits with its own
//! [`QueryError`] before any amount is added up.

use fossil_types::{Cents, PriceEntry, TicketData, TicketInfo};

use crate::error::{QueryError, Result};

/// Header and rule text used when rendering a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptStyle {
    /// Shown in the header as `Thank you for visiting the <name>!`.
    pub museum_name: String,
    /// Separates the header, the ticket lines and the total.
    pub rule: String,
}

impl Default for ReceiptStyle {
    fn default() -> Self {
        Self {
            museum_name: "Dinosaur Museum".to_string(),
            rule: "-".repeat(43),
        }
    }
}

/// A validated ticket with every price resolved.
#[derive(Debug, Clone)]
struct PricedTicket<'a> {
    entrant_type: &'a str,
    admission: &'a PriceEntry,
    base: Cents,
    extras: Vec<(&'a PriceEntry, Cents)>,
}

impl PricedTicket<'_> {
    fn total(&self) -> Result<Cents> {
        self.extras
            .iter()
            .try_fold(self.base, |total, (_, price)| total.checked_add(*price))
            .ok_or(QueryError::PriceOverflow)
    }

    fn receipt_line(&self, total: Cents) -> String {
        let mut line = format!(
            "{} {}: {}",
            capitalize(self.entrant_type),
            self.admission.description,
            total
        );
        if !self.extras.is_empty() {
            let extras: Vec<&str> = self
                .extras
                .iter()
                .map(|(extra, _)| extra.description.as_str())
                .collect();
            line.push_str(&format!(" ({})", extras.join(", ")));
        }
        line
    }
}

fn price_ticket<'a>(ticket_data: &'a TicketData, info: &'a TicketInfo) -> Result<PricedTicket<'a>> {
    let admission = ticket_data
        .admission(&info.ticket_type)
        .ok_or_else(|| QueryError::TicketTypeNotFound(info.ticket_type.clone()))?;

    let entrant_type = info.entrant_type.as_str();
    let base = admission
        .price_for(entrant_type)
        .ok_or_else(|| QueryError::EntrantTypeNotFound(info.entrant_type.clone()))?;

    let mut extras = Vec::with_capacity(info.extras.len());
    for name in &info.extras {
        let extra = ticket_data
            .extra(name)
            .ok_or_else(|| QueryError::ExtraTypeNotFound(name.clone()))?;
        let price = extra
            .price_for(entrant_type)
            .ok_or_else(|| QueryError::EntrantTypeNotFound(info.entrant_type.clone()))?;
        extras.push((extra, price));
    }

    Ok(PricedTicket {
        entrant_type,
        admission,
        base,
        extras,
    })
}

/// Returns the price of a single ticket: the admission price for the
/// entrant plus the entrant's price for every extra.
///
/// # Errors
///
/// - [`QueryError::TicketTypeNotFound`] if the ticket type is unknown
/// - [`QueryError::EntrantTypeNotFound`] if the ticket or an extra has no
///   price for the entrant
/// - [`QueryError::ExtraTypeNotFound`] for the first unknown extra
/// - [`QueryError::PriceOverflow`] if the total does not fit in a `u64`
pub fn calculate_ticket_price(ticket_data: &TicketData, info: &TicketInfo) -> Result<Cents> {
    let total = price_ticket(ticket_data, info)?.total()?;
    tracing::trace!(
        ticket_type = %info.ticket_type,
        entrant_type = %info.entrant_type,
        extras = info.extras.len(),
        cents = total.as_u64(),
        "ticket priced"
    );
    Ok(total)
}

/// Renders a receipt for a batch of purchases with the default style.
///
/// See [`purchase_tickets_with`].
pub fn purchase_tickets(ticket_data: &TicketData, purchases: &[TicketInfo]) -> Result<String> {
    purchase_tickets_with(ticket_data, purchases, &ReceiptStyle::default())
}

/// Renders a receipt for a batch of purchases.
///
/// Every purchase is validated before anything is rendered, so a single
/// invalid purchase fails the whole batch. When several purchases are
/// invalid, the error is ranked across the batch: an unknown ticket type
/// beats an unknown entrant type, which beats an unknown extra. Within a
/// rank the earliest purchase wins.
///
/// ```text
/// Thank you for visiting the Dinosaur Museum!
/// -------------------------------------------
/// Adult General Admission: $50.00 (Movie Access, Terrace Access)
/// Senior General Admission: $35.00 (Terrace Access)
/// -------------------------------------------
/// TOTAL: $85.00
/// ```
pub fn purchase_tickets_with(
    ticket_data: &TicketData,
    purchases: &[TicketInfo],
    style: &ReceiptStyle,
) -> Result<String> {
    let mut lines = Vec::with_capacity(purchases.len());
    let mut errors = Vec::new();
    let mut total = Some(Cents::ZERO);

    for info in purchases {
        match price_ticket(ticket_data, info).and_then(|ticket| {
            let ticket_total = ticket.total()?;
            Ok((ticket.receipt_line(ticket_total), ticket_total))
        }) {
            Ok((line, ticket_total)) => {
                total = total.and_then(|total| total.checked_add(ticket_total));
                lines.push(line);
            }
            Err(err) => errors.push(err),
        }
    }

    if let Some(err) = errors.into_iter().min_by_key(batch_rank) {
        return Err(err);
    }
    let total = total.ok_or(QueryError::PriceOverflow)?;

    let mut receipt = format!(
        "Thank you for visiting the {}!\n{}",
        style.museum_name, style.rule
    );
    for line in &lines {
        receipt.push('\n');
        receipt.push_str(line);
    }
    receipt.push_str(&format!("\n{}\nTOTAL: {total}", style.rule));

    tracing::debug!(
        tickets = lines.len(),
        cents = total.as_u64(),
        "receipt rendered"
    );
    Ok(receipt)
}

/// Orders batch errors: lower ranks are reported first.
fn batch_rank(err: &QueryError) -> u8 {
    match err {
        QueryError::TicketTypeNotFound(_) => 0,
        QueryError::EntrantTypeNotFound(_) => 1,
        QueryError::ExtraTypeNotFound(_) => 2,
        _ => 3,
    }
}

/// Uppercases the first character: `"adult"` becomes `"Adult"`.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
