use chrono::Utc;

pub fn run(yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !yes {
        eprintln!("this restarts your streak from zero and sends the challenge back to day 1");
        eprintln!("(your challenge level is kept); pass --yes to confirm");
        std::process::exit(1);
    }

    let now = Utc::now();
    let mut tracker = super::load_tracker(now)?;
    let event = tracker.relapse(now);
    super::save_tracker(&tracker, now)?;
    super::print_event(&event);
    Ok(())
}
