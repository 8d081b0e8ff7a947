use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a survey finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - survey id
/// - node path
/// - detail (target id, cycle, ...), if present
pub fn fingerprint_for_node(
    check_id: &str,
    code: &str,
    survey_id: &str,
    node_path: &str,
    detail: Option<&str>,
) -> String {
    let mut parts = vec![check_id, code, survey_id, node_path];
    if let Some(d) = detail {
        parts.push(d);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
