use crate::request::Cylinder;

/// Ascending copy of `requests`. The input is left untouched.
pub fn sort_ascending(requests: &[Cylinder]) -> Vec<Cylinder> {
    let mut sorted = requests.to_vec();
    sorted.sort_unstable();
    sorted
}
