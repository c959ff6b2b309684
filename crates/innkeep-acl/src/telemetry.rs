// Engine counters. Without an installed recorder these are no-ops.

use metrics::counter;

pub(crate) fn track_resolution(has_role: bool) {
    let outcome = if has_role { "role" } else { "no_role" };
    counter!("acl_resolutions_total", "outcome" => outcome).increment(1);
}

pub(crate) fn track_override_write(success: bool) {
    let status = if success { "success" } else { "error" };
    counter!("acl_override_writes_total", "status" => status).increment(1);
}

pub(crate) fn track_override_decode_failure() {
    counter!("acl_override_decode_failures_total").increment(1);
}
