use std::process::Command;

#[test]
fn no_arguments_prints_first_eleven_fibonacci_numbers() {
    let output = Command::new(env!("CARGO_BIN_EXE_fibcalc"))
        .output()
        .expect("failed to run fibcalc");

    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let expected = "\
fib(0) = 0
fib(1) = 1
fib(2) = 1
fib(3) = 2
fib(4) = 3
fib(5) = 5
fib(6) = 8
fib(7) = 13
fib(8) = 21
fib(9) = 34
fib(10) = 55
";
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}
