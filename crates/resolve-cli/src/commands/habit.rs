use chrono::Utc;
use clap::Subcommand;
use resolve_core::DAILY_HABITS;

#[derive(Subcommand)]
pub enum HabitAction {
    /// List today's habits and their completion marks
    List,
    /// Toggle one habit by its number (1-based, as shown by `list`)
    Toggle {
        /// Habit number from `habit list`
        number: usize,
    },
    /// Complete the day once every habit is checked
    Done,
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();
    match action {
        HabitAction::List => {
            let tracker = super::load_tracker(now)?;
            let done = tracker.challenge.completed_today();
            for (i, habit) in DAILY_HABITS.iter().enumerate() {
                let mark = if done.contains(&i) { "x" } else { " " };
                println!("{}. [{mark}] {habit}", i + 1);
            }
        }
        HabitAction::Toggle { number } => {
            let index = habit_index(number)?;
            let mut tracker = super::load_tracker(now)?;
            let completed = tracker.challenge.toggle_habit(index)?;
            super::save_tracker(&tracker, now)?;
            let state = if completed { "done" } else { "not done" };
            println!("habit {number} marked {state}");
            if tracker.challenge.all_habits_completed_today() {
                println!("all habits complete -- run `resolve habit done` to finish the day");
            }
        }
        HabitAction::Done => {
            let mut tracker = super::load_tracker(now)?;
            let events = tracker.challenge.complete_day(now);
            super::save_tracker(&tracker, now)?;
            if events.is_empty() {
                println!("nothing to complete (habits unfinished, day already counted, or challenge inactive)");
            } else {
                for event in &events {
                    super::print_event(event);
                }
            }
        }
    }
    Ok(())
}

/// Map a 1-based display number to a 0-based engine index.
fn habit_index(number: usize) -> Result<usize, Box<dyn std::error::Error>> {
    number
        .checked_sub(1)
        .ok_or_else(|| "habit numbers start at 1".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn habit_number_zero_is_an_error() {
        let err = habit_index(0).unwrap_err();
        assert_eq!(err.to_string(), "habit numbers start at 1");
    }

    #[test]
    fn habit_numbers_shift_to_zero_based_indices() {
        assert_eq!(habit_index(1).unwrap(), 0);
        assert_eq!(habit_index(5).unwrap(), 4);
    }
}
