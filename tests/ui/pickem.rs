#[path = "pickem/game_card.rs"]
mod game_card;

#[path = "pickem/game_pick.rs"]
mod game_pick;

#[path = "pickem/league_card.rs"]
mod league_card;

#[path = "pickem/pick_form.rs"]
mod pick_form;

#[path = "pickem/standings_table.rs"]
mod standings_table;
