//! List query plan for players.
//!
//! Turns untrusted list parameters into a `PlayerListQuery` whose predicates carry every
//! user-supplied value as a bind parameter. Only the sort column and direction reach the
//! SQL text, and both are picked from closed enums.

use sea_orm::{ColumnTrait, Condition, EntityTrait, Order, QueryFilter, QueryOrder, Select};
use serde::Deserialize;
use std::num::IntErrorKind;

use crate::server::model::player::Position;

/// Page sizes a client may request.
pub const PAGE_SIZES: [u64; 4] = [5, 10, 20, 50];
/// Page size used when the requested one is missing or not in `PAGE_SIZES`.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Raw list parameters from the query string.
///
/// Kept as strings so a malformed number falls back to its default instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerListParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub search: Option<String>,
    pub position: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

/// Sortable player columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Team,
    Position,
    Ppg,
    Years,
}

impl SortField {
    /// Parses an exact field name; anything else sorts by name.
    pub fn parse(value: &str) -> Self {
        match value {
            "team" => SortField::Team,
            "position" => SortField::Position,
            "ppg" => SortField::Ppg,
            "years" => SortField::Years,
            _ => SortField::Name,
        }
    }

    pub fn column(self) -> entity::player::Column {
        match self {
            SortField::Name => entity::player::Column::Name,
            SortField::Team => entity::player::Column::Team,
            SortField::Position => entity::player::Column::Position,
            SortField::Ppg => entity::player::Column::Ppg,
            SortField::Years => entity::player::Column::Years,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `DESC` in any letter case sorts descending; anything else sorts ascending.
    pub fn parse(value: &str) -> Self {
        if value.to_uppercase() == "DESC" {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn order(self) -> Order {
        match self {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

/// Normalized, safe representation of a player list request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerListQuery {
    /// Trimmed, non-empty search term matched against name and team.
    pub search: Option<String>,
    pub position: Option<Position>,
    pub sort_by: SortField,
    pub sort_dir: SortDirection,
    /// Requested 1-indexed page, before clamping to the last page.
    pub page: u64,
    pub page_size: u64,
}

impl Default for PlayerListQuery {
    fn default() -> Self {
        Self::from_params(PlayerListParams::default())
    }
}

impl PlayerListQuery {
    /// Applies defaulting and allow-list rules to raw list parameters.
    ///
    /// - `page` below 1 or unparseable becomes 1
    /// - `page_size` outside `PAGE_SIZES` becomes `DEFAULT_PAGE_SIZE`
    /// - blank `search` is dropped
    /// - `position` outside the five tokens is dropped, not rejected
    /// - unknown `sort_by` becomes `name`, anything but `DESC` becomes ascending
    pub fn from_params(params: PlayerListParams) -> Self {
        let page = params
            .page
            .as_deref()
            .map(parse_page)
            .unwrap_or(1)
            .max(1);

        let page_size = params
            .page_size
            .as_deref()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|size| PAGE_SIZES.contains(size))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let search = params
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let position = params
            .position
            .as_deref()
            .and_then(|p| Position::parse(p.trim()));

        Self {
            search,
            position,
            sort_by: params
                .sort_by
                .as_deref()
                .map(SortField::parse)
                .unwrap_or_default(),
            sort_dir: params
                .sort_dir
                .as_deref()
                .map(SortDirection::parse)
                .unwrap_or_default(),
            page,
            page_size,
        }
    }

    /// Builds the AND of all active predicates.
    ///
    /// Search contributes `(name LIKE ? OR team LIKE ?)` with `%term%` bound twice and
    /// the position filter contributes `position = ?`. With neither active the condition
    /// is empty and selects the whole table.
    pub fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(term) = &self.search {
            condition = condition.add(
                Condition::any()
                    .add(entity::player::Column::Name.contains(term.as_str()))
                    .add(entity::player::Column::Team.contains(term.as_str())),
            );
        }

        if let Some(position) = self.position {
            condition = condition.add(entity::player::Column::Position.eq(position.as_str()));
        }

        condition
    }

    /// Filtered and ordered select, without pagination.
    ///
    /// Rows with equal sort keys are ordered by id so pages never overlap.
    pub fn select(&self) -> Select<entity::player::Entity> {
        let mut select = entity::prelude::Player::find();

        // An empty condition would still render as `WHERE TRUE`
        if self.search.is_some() || self.position.is_some() {
            select = select.filter(self.condition());
        }

        select
            .order_by(self.sort_by.column(), self.sort_dir.order())
            .order_by_asc(entity::player::Column::Id)
    }
}

/// Parses a requested page number; an oversized number saturates so it clamps to the
/// last page later, anything else unparseable becomes 1.
fn parse_page(raw: &str) -> u64 {
    match raw.trim().parse::<u64>() {
        Ok(page) => page,
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => 1,
    }
}

/// Resolved page position once the filtered total is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PageWindow {
    /// Clamps the requested page into `1..=total_pages`.
    ///
    /// `total_pages` is never below 1, so an empty result still reports page 1 of 1.
    pub fn resolve(requested_page: u64, page_size: u64, total: u64) -> Self {
        let total_pages = total.div_ceil(page_size.max(1)).max(1);
        let page = requested_page.clamp(1, total_pages);

        Self {
            page,
            page_size,
            total,
            total_pages,
        }
    }
}
