use school_transport::input::{
    parse_route_choice, parse_student_count, parse_vehicle_choice, StudentPrompter,
};
use school_transport::{PlanError, RouteChoice, Student, TransportPlan, VehicleChoice};
use std::io::Cursor;

fn prompter(input: &str) -> StudentPrompter<Cursor<Vec<u8>>, Vec<u8>> {
    byte_prompter(input.as_bytes())
}

fn byte_prompter(input: &[u8]) -> StudentPrompter<Cursor<Vec<u8>>, Vec<u8>> {
    StudentPrompter::new(Cursor::new(input.to_vec()), Vec::new())
}

fn prompt_output(prompter: StudentPrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    let (_, output) = prompter.into_inner();
    String::from_utf8(output).unwrap()
}

#[test]
fn collects_students_in_entered_order() {
    let mut plan = TransportPlan::new();
    let mut prompter = prompter("2\nAsmi Jain\n1\n6\nBhoomi Bachav\n2\n4\n");

    let added = prompter.collect_students(&mut plan).unwrap();

    assert_eq!(added, 2);
    assert_eq!(
        plan.students(),
        [
            Student::new("Asmi Jain", 1, 6),
            Student::new("Bhoomi Bachav", 2, 4)
        ]
    );

    let output = prompt_output(prompter);
    assert!(output.starts_with("Enter the number of students to add: "));
    assert!(output.contains("Enter name of student 1: "));
    assert!(output.contains("Enter name of student 2: "));
}

#[test]
fn non_numeric_choice_is_reprompted() {
    let mut prompter = prompter("Simran\ntwo\n2\n3\n");

    let student = prompter.read_student(1).unwrap();

    assert_eq!(student.vehicle_choice, VehicleChoice::Vehicle2);
    assert_eq!(student.route_choice, RouteChoice::Route3);
    let output = prompt_output(prompter);
    assert!(output.contains("Invalid vehicle: \"two\". Please try again."));
}

#[test]
fn out_of_range_route_is_reprompted() {
    let mut prompter = prompter("Nischay\n1\n9\n8\n");

    let student = prompter.read_student(1).unwrap();

    assert_eq!(student.route_choice, RouteChoice::Route8);
    let output = prompt_output(prompter);
    assert!(output.contains("Invalid route choice 9: expected a number from 1 to 8"));
}

#[test]
fn repeated_bad_input_falls_back_to_defaults() {
    let mut prompter = prompter("\nAsmi\nx\ny\n0\n-1\n").with_max_attempts(2);

    let student = prompter.read_student(1).unwrap();

    assert_eq!(student.name, "Asmi");
    assert_eq!(student.vehicle_choice, VehicleChoice::Vehicle1);
    assert_eq!(student.route_choice, RouteChoice::Route1);

    let output = prompt_output(prompter);
    assert_eq!(
        output
            .matches("Too many invalid attempts, using the default.")
            .count(),
        2
    );
    assert!(output.contains("Invalid route choice -1: expected a number from 1 to 8"));
}

#[test]
fn blank_names_use_the_placeholder_after_retries() {
    let mut prompter = prompter("\n \n\n1\n2\n");

    let student = prompter.read_student(4).unwrap();

    assert_eq!(student.name, "Student 4");
    assert_eq!(student.route_choice, RouteChoice::Route2);
}

#[test]
fn name_that_is_not_utf8_is_reprompted_and_collection_continues() {
    let mut plan = TransportPlan::new();
    let mut input = b"2\n".to_vec();
    input.extend_from_slice(b"\xff\xfe\nAsmi\n1\n6\nBhoomi\n2\n4\n");
    let mut prompter = byte_prompter(&input);

    let added = prompter.collect_students(&mut plan).unwrap();

    assert_eq!(added, 2);
    assert_eq!(
        plan.students(),
        [Student::new("Asmi", 1, 6), Student::new("Bhoomi", 2, 4)]
    );
    let output = prompt_output(prompter);
    assert!(output.contains("Invalid text (not UTF-8)"));
}

#[test]
fn non_utf8_lines_fall_back_to_the_default_name() {
    let mut prompter = byte_prompter(b"\xff\n\xc3\n\xfe\xfe\n2\n5\n");

    let student = prompter.read_student(2).unwrap();

    assert_eq!(student.name, "Student 2");
    assert_eq!(student.vehicle_choice, VehicleChoice::Vehicle2);
    assert_eq!(student.route_choice, RouteChoice::Route5);
}

#[test]
fn invalid_student_count_defaults_to_zero() {
    let mut plan = TransportPlan::new();
    let mut prompter = prompter("many\nsome\nlots\n");

    assert_eq!(prompter.collect_students(&mut plan).unwrap(), 0);
    assert!(plan.students().is_empty());
}

#[test]
fn end_of_input_keeps_students_already_entered() {
    let mut plan = TransportPlan::new();
    let mut prompter = prompter("3\nAsmi\n1\n6\nBhoomi\n2\n");

    let added = prompter.collect_students(&mut plan).unwrap();

    assert_eq!(added, 1);
    assert_eq!(plan.students(), [Student::new("Asmi", 1, 6)]);
}

#[test]
fn empty_input_adds_nobody() {
    let mut plan = TransportPlan::new();
    let mut prompter = prompter("");

    assert_eq!(prompter.collect_students(&mut plan).unwrap(), 0);
    assert!(plan.students().is_empty());
}

#[test]
fn read_student_reports_end_of_input() {
    let mut prompter = prompter("Asmi\n");

    assert!(matches!(
        prompter.read_student(1),
        Err(PlanError::EndOfInput)
    ));
}

#[test]
fn parsers_classify_bad_input() {
    assert_eq!(parse_student_count("4").unwrap(), 4);
    assert!(matches!(
        parse_student_count("-3"),
        Err(PlanError::InvalidInput { .. })
    ));
    assert!(matches!(
        parse_route_choice("abc"),
        Err(PlanError::InvalidInput { field: "route", .. })
    ));
    assert!(matches!(
        parse_route_choice("0"),
        Err(PlanError::InvalidChoice { code: 0, .. })
    ));
}

#[test]
fn negative_and_huge_codes_are_out_of_range_choices() {
    assert!(matches!(
        parse_vehicle_choice("-1"),
        Err(PlanError::InvalidChoice {
            field: "vehicle",
            code: -1,
            max: 2
        })
    ));
    assert!(matches!(
        parse_route_choice("99999999999"),
        Err(PlanError::InvalidChoice {
            code: 99999999999,
            ..
        })
    ));
    assert!(matches!(
        parse_route_choice("123456789012345678901234567890"),
        Err(PlanError::InvalidChoice { code: i64::MAX, .. })
    ));
    assert!(matches!(
        parse_vehicle_choice("+2"),
        Ok(VehicleChoice::Vehicle2)
    ));
    assert!(matches!(
        parse_vehicle_choice("-"),
        Err(PlanError::InvalidInput { .. })
    ));
}
