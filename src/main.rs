/// Command-line interface for the availability calendar.
///
/// An interactive menu over the calendar model: a month grid with
/// per-day status, a day view of the 21-slot template, and the
/// doctor-side mutations (toggle slot, toggle whole day, clear day,
/// cancel appointment).

use std::io::{self, Write};

use availcal::{
    build_month_grid, status, Appointment, CalendarStore, DateKey, DayStatus, DayViewController,
    MonthCursor, Patient,
};
use chrono::{Local, NaiveDate};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct CalendarCli {
    store: CalendarStore,
    cursor: MonthCursor,
    today: NaiveDate,
    running: bool,
}

impl CalendarCli {
    fn new(today: NaiveDate) -> Self {
        let mut store = CalendarStore::seeded(today);
        seed_demo_appointments(&mut store, today);

        CalendarCli {
            store,
            cursor: MonthCursor::for_date(today),
            today,
            running: true,
        }
    }

    fn print_header(&self) {
        println!("\n{}", "=".repeat(60));
        println!("       DOCTOR AVAILABILITY CALENDAR");
        println!("{}", "=".repeat(60));
    }

    fn print_menu(&self) {
        println!("\n--- Main Menu ---");
        println!("1. View month grid");
        println!("2. Previous month");
        println!("3. Next month");
        println!("4. View day");
        println!("5. Toggle a slot");
        println!("6. Open/close whole day");
        println!("7. Clear a day");
        println!("8. Cancel an appointment");
        println!("9. Exit");
        println!("{}", "-".repeat(20));
    }

    fn get_input(&self, prompt: &str, default: Option<&str>) -> String {
        if let Some(def) = default {
            print!("{} [{}]: ", prompt, def);
        } else {
            print!("{}: ", prompt);
        }
        io::stdout().flush().unwrap();

        let mut input = String::new();
        io::stdin().read_line(&mut input).unwrap();
        let input = input.trim();

        if input.is_empty() {
            default.unwrap_or("").to_string()
        } else {
            input.to_string()
        }
    }

    fn get_int_input(&self, prompt: &str, default: Option<i32>) -> i32 {
        loop {
            let default_str = default.map(|d| d.to_string());
            let input = self.get_input(prompt, default_str.as_deref());

            if let Ok(value) = input.parse::<i32>() {
                return value;
            }
            println!("Please enter a valid number");
        }
    }

    fn get_date_input(&self, prompt: &str) -> NaiveDate {
        let default = self.today.format("%Y-%m-%d").to_string();
        loop {
            let input = self.get_input(prompt, Some(&default));
            if let Ok(date) = NaiveDate::parse_from_str(&input, "%Y-%m-%d") {
                return date;
            }
            println!("Please enter a date as YYYY-MM-DD");
        }
    }

    fn status_marker(status: DayStatus) -> char {
        match status {
            DayStatus::Past => '.',
            DayStatus::Available => 'o',
            DayStatus::WithPatients => '*',
            DayStatus::Full => '#',
            DayStatus::Unavailable => '-',
        }
    }

    fn view_month(&self) {
        let grid = match build_month_grid(self.cursor, self.today, &self.store) {
            Ok(grid) => grid,
            Err(e) => {
                println!("Error building month grid: {}", e);
                return;
            }
        };

        println!("\n    {} {}", grid.month_name, grid.year);
        println!("  Mo   Tu   We   Th   Fr   Sa   Su");
        for week in &grid.weeks {
            for cell in week {
                match cell {
                    Some(day) => print!("{:>3}{} ", day.day, Self::status_marker(day.status)),
                    None => print!("     "),
                }
            }
            println!();
        }
        println!("\n  o available   * with patients   # full   - unavailable   . past");
    }

    fn view_day(&mut self) {
        let date = self.get_date_input("Date");
        let controller = DayViewController::new(&mut self.store);
        let slots = controller.day_slots(date);

        println!("\n--- {} ---", date.format("%A, %B %e %Y"));
        for (index, slot) in slots.iter().enumerate() {
            let state = if slot.has_appointment {
                "booked"
            } else if slot.available {
                "open"
            } else {
                "closed"
            };
            print!("{:>2}. {:>8}  [{}]", index, slot.time, state);
            if let Some(patient) = &slot.patient {
                print!("  {} ({})", patient.name, patient.reason);
            }
            println!();
        }
    }

    fn toggle_slot(&mut self) {
        let date = self.get_date_input("Date");
        let index = self.get_int_input("Slot index (0-20)", Some(0));
        if index < 0 {
            println!("Slot index cannot be negative");
            return;
        }

        let mut controller = DayViewController::new(&mut self.store);
        match controller.toggle_slot(date, index as usize) {
            Ok(true) => println!("Slot toggled"),
            Ok(false) => println!("That slot has an appointment; cancel it first"),
            Err(e) => println!("Error: {}", e),
        }
    }

    fn toggle_day(&mut self) {
        let date = self.get_date_input("Date");
        let answer = self.get_input("Open the whole day? (y/n)", Some("y"));
        let make_available = answer.to_lowercase() == "y";

        let mut controller = DayViewController::new(&mut self.store);
        match controller.toggle_day(date, make_available) {
            Ok(()) => {
                if make_available {
                    println!("Day opened (appointment slots untouched)")
                } else {
                    println!("Day closed")
                }
            }
            Err(e) => println!("Error: {}", e),
        }
    }

    fn clear_day(&mut self) {
        let date = self.get_date_input("Date");
        let mut controller = DayViewController::new(&mut self.store);
        match controller.clear_day(date) {
            Ok(()) => println!("Availability cleared for {}", date),
            Err(e) => println!("Error: {}", e),
        }
    }

    fn cancel_appointment(&mut self) {
        let date = self.get_date_input("Date");
        let index = self.get_int_input("Slot index (0-20)", Some(0));
        if index < 0 {
            println!("Slot index cannot be negative");
            return;
        }

        let mut controller = DayViewController::new(&mut self.store);
        match controller.cancel_appointment(date, index as usize) {
            Ok(true) => println!("Appointment cancelled"),
            Ok(false) => println!("No appointment in that slot"),
            Err(e) => println!("Error: {}", e),
        }
    }

    fn run(&mut self) {
        self.print_header();
        println!("Today is {}", self.today.format("%A, %B %e %Y"));

        while self.running {
            self.print_menu();
            let choice = self.get_int_input("Choice", None);

            match choice {
                1 => self.view_month(),
                2 => {
                    self.cursor = self.cursor.previous();
                    self.view_month();
                }
                3 => {
                    self.cursor = self.cursor.next();
                    self.view_month();
                }
                4 => self.view_day(),
                5 => self.toggle_slot(),
                6 => self.toggle_day(),
                7 => self.clear_day(),
                8 => self.cancel_appointment(),
                9 => {
                    println!("Goodbye");
                    self.running = false;
                }
                _ => println!("Please choose 1-9"),
            }
        }
    }
}

/// A couple of booked slots on the next weekday so the grid has
/// something to show.
fn seed_demo_appointments(store: &mut CalendarStore, today: NaiveDate) {
    let mut date = today;
    while status::is_weekend(date) {
        date = match date.succ_opt() {
            Some(next) => next,
            None => return,
        };
    }

    let bookings = [
        ("9:00 AM", "Sarah Johnson", "Follow-up", "City Health Clinic"),
        ("2:30 PM", "Liam Carter", "Blood pressure check", "Northside Clinic"),
    ];

    let mut appointments = Vec::new();
    for (time, name, reason, clinic) in bookings {
        let patient = Patient {
            name: name.to_string(),
            reason: reason.to_string(),
            clinic: clinic.to_string(),
        };
        match Appointment::new(time, Some(patient)) {
            Ok(appointment) => appointments.push(appointment),
            Err(e) => println!("Skipping demo booking: {}", e),
        }
    }

    info!(%date, count = appointments.len(), "seeding demo appointments");
    store.set_appointments(DateKey::from(date), appointments);
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let today = Local::now().date_naive();
    info!("Starting availability calendar");

    let mut cli = CalendarCli::new(today);
    cli.run();
}
