#[cfg(test)]
pub mod test {
    use std::{ io::{ Cursor, Write }, path::Path };

    use tempfile::NamedTempFile;

    use crate::{
        error::ScheduleError,
        request::{
            parse_head,
            source::{ load_requests, parse_requests },
            CylinderRange,
            Workload,
        },
    };

    fn parse(text: &str) -> Result<Vec<u32>, ScheduleError> {
        parse_requests(Cursor::new(text), CylinderRange::default(), Path::new("inline"))
    }

    #[test]
    fn reads_one_cylinder_per_line() {
        let requests = parse("2150\n2069\n1212\n  2296 \n").unwrap();
        assert_eq!(requests, vec![2150, 2069, 1212, 2296]);
    }

    #[test]
    fn skips_blank_lines() {
        let requests = parse("\n10\n\n   \n20\n\n").unwrap();
        assert_eq!(requests, vec![10, 20]);
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn accepts_crlf_line_endings() {
        assert_eq!(parse("1\r\n2\r\n").unwrap(), vec![1, 2]);
    }

    #[test]
    fn rejects_malformed_lines_with_their_line_number() {
        match parse("10\n\nabc\n20\n") {
            Err(ScheduleError::MalformedRequest { line, content }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "abc");
            }
            other => panic!("expected MalformedRequest, got {other:?}"),
        }

        assert!(matches!(parse("-4\n"), Err(ScheduleError::MalformedRequest { line: 1, .. })));
        assert!(matches!(parse("12.5\n"), Err(ScheduleError::MalformedRequest { line: 1, .. })));
    }

    #[test]
    fn rejects_cylinders_beyond_the_disk() {
        match parse("4999\n5000\n") {
            Err(ScheduleError::RequestOutOfRange { line, cylinder, cylinders }) => {
                assert_eq!(line, 2);
                assert_eq!(cylinder, 5000);
                assert_eq!(cylinders, 5000);
            }
            other => panic!("expected RequestOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "2150\n2069\n1212").unwrap();

        let requests = load_requests(file.path(), CylinderRange::default()).unwrap();
        assert_eq!(requests, vec![2150, 2069, 1212]);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = load_requests(&path, CylinderRange::default()).unwrap_err();
        assert!(matches!(err, ScheduleError::RequestSourceUnavailable { .. }));
    }

    #[test]
    fn head_must_be_a_non_negative_integer() {
        assert_eq!(parse_head("5674").unwrap(), 5674);
        assert_eq!(parse_head(" 0 ").unwrap(), 0);

        for raw in ["-1", "abc", "", "3.5"] {
            assert!(
                matches!(parse_head(raw), Err(ScheduleError::InvalidHeadPosition(_))),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn workload_checks_every_request_against_the_range() {
        let range = CylinderRange::new(100).unwrap();

        let workload = Workload::new(250, vec![0, 99], range).unwrap();
        assert_eq!(workload.head(), 250);
        assert_eq!(workload.requests(), &[0, 99]);

        let err = Workload::new(0, vec![5, 100], range).unwrap_err();
        assert!(matches!(err, ScheduleError::RequestOutOfRange { line: 2, cylinder: 100, .. }));
    }

    #[test]
    fn cylinder_range_needs_a_cylinder() {
        assert!(matches!(CylinderRange::new(0), Err(ScheduleError::InvalidCylinderRange(0))));

        let range = CylinderRange::new(5000).unwrap();
        assert_eq!(range.last(), 4999);
        assert!(range.contains(4999));
        assert!(!range.contains(5000));
        assert_eq!(CylinderRange::default(), range);
    }
}
