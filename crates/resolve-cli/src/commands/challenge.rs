use chrono::Utc;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ChallengeAction {
    /// Start the challenge at the current level
    Start,
    /// Print challenge state as JSON
    Status,
}

pub fn run(action: ChallengeAction) -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();
    match action {
        ChallengeAction::Start => {
            let mut tracker = super::load_tracker(now)?;
            let event = tracker.challenge.start(now)?;
            super::save_tracker(&tracker, now)?;
            super::print_event(&event);
        }
        ChallengeAction::Status => {
            let tracker = super::load_tracker(now)?;
            let json = serde_json::to_string_pretty(&tracker.challenge.snapshot())?;
            println!("{json}");
        }
    }
    Ok(())
}
