use root_compare::comparison::table::{format_scientific, write_table};
use root_compare::root_finding::algorithms::Algorithm;
use root_compare::root_finding::report::{IterateRecord, RootFindingReport, TerminationReason};

fn report(algorithm: Algorithm, trace: Vec<IterateRecord>) -> RootFindingReport {
    RootFindingReport {
        root               : trace.last().map(|r| r.value).unwrap_or(0.0),
        iterations         : trace.len() - algorithm.seed_entries(),
        trace,
        termination_reason : TerminationReason::ToleranceReached,
        algorithm,
    }
}

fn render_table(c: f64, reports: &[&RootFindingReport]) -> String {
    let mut out = String::new();
    write_table(&mut out, c, reports).unwrap();
    out
}

#[test]
fn scientific_notation_pads_exponent() {
    assert_eq!(format_scientific(1.5e-5, 2), "1.50e-05");
    assert_eq!(format_scientific(0.0788, 2), "7.88e-02");
    assert_eq!(format_scientific(0.0, 2), "0.00e+00");
    assert_eq!(format_scientific(12500.0, 2), "1.25e+04");
    assert_eq!(format_scientific(-3.0, 2), "-3.00e+00");
    assert_eq!(format_scientific(1e-100, 2), "1.00e-100");
    assert_eq!(format_scientific(f64::NAN, 2), "NaN");
}

#[test]
fn renders_fixed_width_rows() {
    let fp = report(Algorithm::FixedPoint, vec![IterateRecord { value: 0.5, error: Some(0.0788), elapsed: None }]);
    let out = render_table(0.5, &[&fp]);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "Results for C = 0.5");
    assert_eq!(lines[2], "Iteration Method              Computed Value Error          Time (s)  ");
    assert_eq!(lines[3], "-".repeat(70));
    assert_eq!(lines[4], "1         Fixed Point         0.50000000     7.88e-02       0.00000000");
}

#[test]
fn secant_seeds_print_zero_error_and_time() {
    let sc = report(
        Algorithm::Secant,
        vec![
            IterateRecord::seed(0.5),
            IterateRecord::seed(0.6),
            IterateRecord::step(0.567, 2.5e-5, 1e-6),
        ],
    );
    let out = render_table(1.0, &[&sc]);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[1], "Results for C = 1");
    assert_eq!(lines[5], "2         Secant              0.60000000     0.00e+00       0.00000000");
    assert_eq!(lines[6], "3         Secant              0.56700000     2.50e-05       0.00000100");
}

#[test]
fn sections_restart_numbering_and_are_separated() {
    let fp = report(Algorithm::FixedPoint, vec![IterateRecord::step(0.5, 0.1, 0.0); 3]);
    let nm = report(Algorithm::ModifiedNewton, vec![IterateRecord::step(0.5, 0.1, 0.0); 2]);
    let sc = report(
        Algorithm::Secant,
        vec![IterateRecord::seed(0.5), IterateRecord::seed(0.6), IterateRecord::step(0.57, 0.1, 0.0)],
    );
    let out = render_table(1.5, &[&fp, &nm, &sc]);

    let separators = out.lines().filter(|l| *l == "-".repeat(70)).count();
    assert_eq!(separators, 3);

    let first_rows: Vec<&str> = out
        .lines()
        .filter(|l| l.starts_with("1         "))
        .collect();
    assert_eq!(first_rows.len(), 3);
    assert!(first_rows[0].contains("Fixed Point"));
    assert!(first_rows[1].contains("Modified Newton"));
    assert!(first_rows[2].contains("Secant"));

    // header + blank + title + 3 separators + 3 + 2 + 3 rows
    assert_eq!(out.lines().count(), 3 + 3 + 8);
}
