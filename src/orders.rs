//! Order Actions
//!
//! Pending-action contexts for the order modals and the trigger-time
//! validation that runs before any of them opens.

use std::collections::HashSet;

use crate::error::UiError;
use crate::models::{OrderRow, OrderStatus};

/// Context captured by the status-change modal
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub order_id: u32,
    pub order_number: String,
    pub status: OrderStatus,
}

/// Context captured by the delete modal
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDeletion {
    pub order_id: u32,
    pub order_number: String,
}

/// Context captured by the bulk modal
#[derive(Debug, Clone, PartialEq)]
pub struct BulkStatusChange {
    pub order_ids: Vec<u32>,
    pub status: OrderStatus,
}

impl BulkStatusChange {
    /// Verb phrase shown in the confirmation text
    pub fn action_text(&self) -> &'static str {
        bulk_action_text(self.status)
    }
}

pub fn bulk_action_text(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Processing => "mark as Processing",
        OrderStatus::Shipped => "mark as Shipped",
        OrderStatus::Delivered => "mark as Delivered",
        OrderStatus::Cancelled => "cancel orders",
        OrderStatus::Pending => "update status",
    }
}

/// Checked rows of the orders table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    checked: HashSet<u32>,
}

impl Selection {
    pub fn set(&mut self, id: u32, checked: bool) {
        if checked {
            self.checked.insert(id);
        } else {
            self.checked.remove(&id);
        }
    }

    pub fn set_all(&mut self, rows: &[OrderRow], checked: bool) {
        if checked {
            self.checked.extend(rows.iter().map(|r| r.id));
        } else {
            self.checked.clear();
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.checked.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    pub fn all_checked(&self, rows: &[OrderRow]) -> bool {
        !rows.is_empty() && rows.iter().all(|r| self.contains(r.id))
    }

    /// Checked ids in table order
    pub fn ids_in(&self, rows: &[OrderRow]) -> Vec<u32> {
        rows.iter().map(|r| r.id).filter(|id| self.contains(*id)).collect()
    }
}

/// Row selection plus the action chosen in the bulk bar.
///
/// The bar only exists while rows are selected, so emptying the selection
/// also forgets the chosen action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkToolbar {
    selection: Selection,
    action: Option<OrderStatus>,
}

impl BulkToolbar {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn action(&self) -> Option<OrderStatus> {
        self.action
    }

    pub fn is_visible(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn choose(&mut self, action: Option<OrderStatus>) {
        self.action = action;
    }

    pub fn check(&mut self, id: u32, checked: bool) {
        self.selection.set(id, checked);
        self.forget_action_if_hidden();
    }

    pub fn check_all(&mut self, rows: &[OrderRow], checked: bool) {
        self.selection.set_all(rows, checked);
        self.forget_action_if_hidden();
    }

    fn forget_action_if_hidden(&mut self) {
        if self.selection.is_empty() {
            self.action = None;
        }
    }

    pub fn prepare(&self, rows: &[OrderRow]) -> Result<BulkStatusChange, UiError> {
        prepare_bulk(self.action, &self.selection, rows)
    }
}

/// Validate the bulk toolbar before opening the confirmation modal
pub fn prepare_bulk(action: Option<OrderStatus>, selection: &Selection, rows: &[OrderRow]) -> Result<BulkStatusChange, UiError> {
    let status = action.ok_or_else(|| UiError::Validation("Please select an action".into()))?;
    let order_ids = selection.ids_in(rows);
    if order_ids.is_empty() {
        return Err(UiError::Validation("Please select at least one order".into()));
    }
    Ok(BulkStatusChange { order_ids, status })
}

/// Validate a status change on the order detail page
pub fn prepare_status_change(
    order_id: u32,
    order_number: &str,
    current: OrderStatus,
    requested: OrderStatus,
) -> Result<StatusChange, UiError> {
    if requested == current {
        return Err(UiError::Unchanged(format!("Status is already set to {}", requested)));
    }
    Ok(StatusChange {
        order_id,
        order_number: order_number.to_string(),
        status: requested,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: u32) -> Vec<OrderRow> {
        (1..=n)
            .map(|id| OrderRow {
                id,
                order_number: format!("ORD-{:04}", id),
                customer: String::new(),
                total: String::new(),
                created: String::new(),
                status: OrderStatus::Pending,
            })
            .collect()
    }

    #[test]
    fn test_bulk_requires_action() {
        let rows = rows(2);
        let mut sel = Selection::default();
        sel.set(1, true);
        assert_eq!(
            prepare_bulk(None, &sel, &rows),
            Err(UiError::Validation("Please select an action".into()))
        );
    }

    #[test]
    fn test_bulk_requires_selection() {
        let rows = rows(2);
        assert_eq!(
            prepare_bulk(Some(OrderStatus::Shipped), &Selection::default(), &rows),
            Err(UiError::Validation("Please select at least one order".into()))
        );
    }

    #[test]
    fn test_bulk_collects_ids_in_table_order() {
        let rows = rows(5);
        let mut sel = Selection::default();
        for id in [4, 1, 3] {
            sel.set(id, true);
        }
        let bulk = prepare_bulk(Some(OrderStatus::Shipped), &sel, &rows).unwrap();
        assert_eq!(bulk.order_ids, vec![1, 3, 4]);
        assert_eq!(bulk.action_text(), "mark as Shipped");
    }

    #[test]
    fn test_select_all_and_clear() {
        let rows = rows(3);
        let mut sel = Selection::default();
        sel.set_all(&rows, true);
        assert!(sel.all_checked(&rows));
        sel.set(2, false);
        assert!(!sel.all_checked(&rows));
        assert_eq!(sel.len(), 2);
        sel.set_all(&rows, false);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_unchanged_status_is_reported() {
        let err = prepare_status_change(7, "ORD-7", OrderStatus::Shipped, OrderStatus::Shipped).unwrap_err();
        assert_eq!(err, UiError::Unchanged("Status is already set to shipped".into()));

        let change = prepare_status_change(7, "ORD-7", OrderStatus::Shipped, OrderStatus::Delivered).unwrap();
        assert_eq!(change.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_action_texts() {
        assert_eq!(bulk_action_text(OrderStatus::Cancelled), "cancel orders");
        assert_eq!(bulk_action_text(OrderStatus::Pending), "update status");
    }

    #[test]
    fn test_clearing_selection_forgets_action() {
        let rows = rows(3);
        let mut bar = BulkToolbar::default();
        bar.check(1, true);
        bar.choose(Some(OrderStatus::Shipped));
        bar.check(1, false);
        assert!(!bar.is_visible());
        assert_eq!(bar.action(), None);

        bar.check(2, true);
        assert_eq!(bar.prepare(&rows), Err(UiError::Validation("Please select an action".into())));
    }

    #[test]
    fn test_unselect_all_forgets_action() {
        let rows = rows(2);
        let mut bar = BulkToolbar::default();
        bar.check_all(&rows, true);
        bar.choose(Some(OrderStatus::Delivered));
        assert_eq!(bar.prepare(&rows).map(|b| b.order_ids), Ok(vec![1, 2]));

        bar.check_all(&rows, false);
        assert_eq!(bar.action(), None);
    }

    #[test]
    fn test_partial_uncheck_keeps_action() {
        let mut bar = BulkToolbar::default();
        bar.check(1, true);
        bar.check(2, true);
        bar.choose(Some(OrderStatus::Processing));
        bar.check(1, false);
        assert_eq!(bar.action(), Some(OrderStatus::Processing));
        assert_eq!(bar.selection().len(), 1);
    }

}
