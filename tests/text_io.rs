use assert_matches::assert_matches;
use orthosweeper::{find_intersections, io, Error, Segments, DEFAULT_EPS};

const GRID: &str = "\
# a frame with a cross in the middle
1 0 0 10 0
2 0 10 10 10
3 0 0 0 10
4 10 10 10 0
5 2 5 8 5
6 5 2 5 8
";

fn run(input: &str) -> String {
    let records = io::parse_segments(input).unwrap();
    let ints = find_intersections(records, DEFAULT_EPS).unwrap();
    let mut out = Vec::new();
    io::write_intersections(&mut out, ints).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn frame_and_cross() {
    assert_eq!(
        run(GRID),
        "1 3 0 0\n1 4 10 0\n2 3 0 10\n2 4 10 10\n5 6 5 5\n"
    );
}

#[test]
fn shared_endpoint_from_text() {
    let out = run("1 0 0 5 0\n2 5 0 10 0\n3 5 -1 5 1\n");
    assert_eq!(out, "1 3 5 0\n2 3 5 0\n");
}

#[test]
fn diagonal_is_rejected() {
    let records = io::parse_segments("1 0 0 10 0\n7 0 0 3 4\n").unwrap();
    assert_matches!(
        find_intersections(records, DEFAULT_EPS),
        Err(Error::UnsupportedOrientation { id: 7 })
    );
}

#[test]
fn lenient_loading_skips_bad_lines() {
    let input = "1 0 0 10 0\n2 5 oops 5 5\n2 5 0 5 5\n2 6 0 6 5\n3 1 1 2 2\n";
    let mut segs = Segments::new(DEFAULT_EPS);
    let mut skipped = 0;
    for r in io::records(input) {
        if r.map_err(|_| ()).and_then(|r| segs.add_record(&r).map_err(|_| ())).is_err() {
            skipped += 1;
        }
    }
    assert_eq!(skipped, 3);
    assert_eq!(segs.len(), 2);
    assert_eq!(orthosweeper::intersections(&segs).len(), 1);
}

#[cfg(feature = "cli")]
mod cli {
    use std::process::Command;

    use super::{run, GRID};

    fn cli() -> Command {
        Command::new(env!("CARGO_BIN_EXE_orthosweeper"))
    }

    fn temp_input(name: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("orthosweeper-{}-{name}.txt", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn cli_writes_to_stdout() {
        let input = temp_input("grid", GRID);
        let out = cli().arg("-i").arg(&input).output().unwrap();
        std::fs::remove_file(&input).unwrap();

        assert!(out.status.success());
        assert_eq!(String::from_utf8(out.stdout).unwrap(), run(GRID));
    }

    #[test]
    fn cli_strict_and_lenient() {
        let input = temp_input("bad", "1 0 0 10 0\n2 5 0 5\n3 5 -1 5 1\n");

        let strict = cli().arg("-i").arg(&input).output().unwrap();
        assert!(!strict.status.success());
        assert!(String::from_utf8(strict.stderr).unwrap().contains("line 2"));

        let lenient = cli()
            .arg("-i")
            .arg(&input)
            .arg("--skip-invalid")
            .output()
            .unwrap();
        std::fs::remove_file(&input).unwrap();

        assert!(lenient.status.success());
        assert_eq!(String::from_utf8(lenient.stdout).unwrap(), "1 3 5 0\n");
    }
}
