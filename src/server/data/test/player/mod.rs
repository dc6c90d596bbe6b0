use crate::server::{
    data::player::PlayerRepository,
    model::{
        player::{PlayerParams, Position},
        query::{PlayerListParams, PlayerListQuery},
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod aggregates;
mod create;
mod delete;
mod get_by_id;
mod get_paginated;
mod update;

fn params(name: &str) -> PlayerParams {
    PlayerParams {
        name: name.to_string(),
        team: "Celtics".to_string(),
        position: Position::SmallForward,
        ppg: 26.9,
        years: 9,
        image_url: String::new(),
    }
}

fn list_query(params: PlayerListParams) -> PlayerListQuery {
    PlayerListQuery::from_params(params)
}
