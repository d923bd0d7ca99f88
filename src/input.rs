use crate::choice::{RouteChoice, VehicleChoice};
use crate::consts::MAX_INPUT_ATTEMPTS;
use crate::error::{PlanError, Result};
use crate::student::Student;
use crate::TransportPlan;
use log::{debug, warn};
use std::io::{BufRead, Write};

const STUDENT_COUNT_PROMPT: &str = "Enter the number of students to add: ";
const VEHICLE_PROMPT: &str = "Choose Vehicle (1 for Vehicle 1, 2 for Vehicle 2): ";
const ROUTE_PROMPT: &str = "Choose Route (1 for Route 1, 2 for Route 2, 3 for Route 3, \
4 for Route 4, 5 for Route 5, 6 for Route 6, 7 for Route 7, 8 for Route 8): ";

pub fn parse_student_count(input: &str) -> Result<usize> {
    input.parse().map_err(|_| PlanError::InvalidInput {
        field: "number of students",
        input: input.to_string(),
    })
}

/// Any integer is accepted here, however large; range checks belong to the
/// choice lookup so out-of-range numbers surface as `InvalidChoice`.
pub fn parse_choice_code(field: &'static str, input: &str) -> Result<i64> {
    if let Ok(code) = input.parse::<i64>() {
        return Ok(code);
    }

    let digits = input.strip_prefix(|sign| sign == '-' || sign == '+').unwrap_or(input);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(PlanError::InvalidInput {
            field,
            input: input.to_string(),
        });
    }

    // Too long for i64
    if input.starts_with('-') {
        Ok(i64::MIN)
    } else {
        Ok(i64::MAX)
    }
}

pub fn parse_vehicle_choice(input: &str) -> Result<VehicleChoice> {
    VehicleChoice::try_from_code(parse_choice_code("vehicle", input)?)
}

pub fn parse_route_choice(input: &str) -> Result<RouteChoice> {
    RouteChoice::try_from_code(parse_choice_code("route", input)?)
}

pub fn parse_student_name(input: &str) -> Result<String> {
    if input.is_empty() {
        return Err(PlanError::InvalidInput {
            field: "student name",
            input: input.to_string(),
        });
    }
    Ok(input.to_string())
}

/// Reads student records from `reader`, writing prompts and complaints about
/// bad input to `writer`.
///
/// A field that keeps failing to parse is re-prompted `max_attempts` times and
/// then takes its default value, so bad input never aborts the session.
pub struct StudentPrompter<R, W> {
    reader: R,
    writer: W,
    max_attempts: usize,
}

impl<R: BufRead, W: Write> StudentPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> StudentPrompter<R, W> {
        StudentPrompter {
            reader,
            writer,
            max_attempts: MAX_INPUT_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> StudentPrompter<R, W> {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Err(PlanError::EndOfInput);
        }

        match String::from_utf8(bytes) {
            Ok(line) => Ok(line.trim().to_string()),
            Err(err) => Err(PlanError::InvalidInput {
                field: "text (not UTF-8)",
                input: String::from_utf8_lossy(err.as_bytes()).trim().to_string(),
            }),
        }
    }

    fn prompt_until_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T>,
        default: T,
    ) -> Result<T> {
        for attempt in 1..=self.max_attempts {
            match self.prompt_line(prompt).and_then(|line| parse(&line)) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_recoverable() => {
                    warn!("Rejected input on attempt {attempt}: {err}");
                    writeln!(self.writer, "{err}. Please try again.")?;
                }
                Err(err) => return Err(err),
            }
        }

        warn!(
            "No valid input after {} attempts, using the default",
            self.max_attempts
        );
        writeln!(self.writer, "Too many invalid attempts, using the default.")?;
        Ok(default)
    }

    pub fn read_student_count(&mut self) -> Result<usize> {
        self.prompt_until_valid(STUDENT_COUNT_PROMPT, parse_student_count, 0)
    }

    /// `number` is the 1-based position shown in the prompt.
    pub fn read_student(&mut self, number: usize) -> Result<Student> {
        let name = self.prompt_until_valid(
            &format!("Enter name of student {number}: "),
            parse_student_name,
            format!("Student {number}"),
        )?;
        let vehicle_choice =
            self.prompt_until_valid(VEHICLE_PROMPT, parse_vehicle_choice, VehicleChoice::default())?;
        let route_choice =
            self.prompt_until_valid(ROUTE_PROMPT, parse_route_choice, RouteChoice::default())?;

        Ok(Student::with_choices(name, vehicle_choice, route_choice))
    }

    /// Prompts for a student count and then for each student, appending them
    /// to `plan` as they are completed. Returns how many students were added.
    ///
    /// If the input ends early the students entered so far stay in the plan.
    pub fn collect_students(&mut self, plan: &mut TransportPlan) -> Result<usize> {
        let count = match self.read_student_count() {
            Ok(count) => count,
            Err(PlanError::EndOfInput) => {
                warn!("Input ended before the number of students was entered");
                return Ok(0);
            }
            Err(err) => return Err(err),
        };
        debug!("Collecting {count} students");

        for number in 1..=count {
            match self.read_student(number) {
                Ok(student) => plan.add_student(student),
                Err(PlanError::EndOfInput) => {
                    warn!("Input ended after {} of {count} students", number - 1);
                    return Ok(number - 1);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(count)
    }
}
