pub mod tracker;

pub fn commands() -> Vec<poise::Command<crate::bot::Bot, color_eyre::eyre::ErrReport>> {
    vec![tracker::commands::info(), tracker::commands::list()]
}
