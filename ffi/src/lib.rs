//! C-ABI wrapper around `teams-core`.
//!
//! # Overview
//! Exposes the teams CRUD API through `extern "C"` functions so a native
//! mobile shell (or any language with a C FFI) can build requests and parse
//! responses while doing the HTTP I/O itself.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-operation `build_*` / `parse_*` mirrors the core API 1:1.
//! - A single `FfiTeamsResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `teams_free_*` function to release them.

pub mod types;

use std::ffi::CString;
use std::os::raw::c_char;
use std::panic::catch_unwind;

use teams_core::http::HttpResponse;

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `TeamsClient` bound to the collection URL.
///
/// Returns null if `collection_url` is null, not an http(s) URL, or if an
/// internal panic occurs. Free with `teams_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn teams_client_new(collection_url: *const c_char) -> *mut FfiTeamsClient {
    catch_unwind(|| {
        if collection_url.is_null() {
            return std::ptr::null_mut();
        }
        let url = unsafe { read_c_str(collection_url) };
        match teams_core::TeamsClient::new(&url) {
            Ok(client) => Box::into_raw(Box::new(FfiTeamsClient { inner: client })),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `teams_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn teams_client_free(client: *mut FfiTeamsClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build an HTTP request for listing all teams.
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `teams_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn teams_build_list_teams(client: *const FfiTeamsClient) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiHttpRequest::from_core(client.inner.build_list_teams())
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for fetching a single team by id.
///
/// Returns null if `client` or `id` is null, or if `id` is blank.
#[unsafe(no_mangle)]
pub extern "C" fn teams_build_get_team(
    client: *const FfiTeamsClient,
    id: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || id.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let id = unsafe { read_c_str(id) };
        match client.inner.build_get_team(&id) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request creating `team`, whose id the caller has chosen.
///
/// Returns null if `client` or `team` is null, if the team id is blank, or
/// if serialization fails.
#[unsafe(no_mangle)]
pub extern "C" fn teams_build_create_team(
    client: *const FfiTeamsClient,
    team: *const FfiTeamInput,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || team.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let team = unsafe { (*team).to_core() };
        match client.inner.build_create_team(&team) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request replacing the team at `id` with `team`.
///
/// The whole record is sent. Returns null if any pointer is null or `id` is
/// blank.
#[unsafe(no_mangle)]
pub extern "C" fn teams_build_update_team(
    client: *const FfiTeamsClient,
    id: *const c_char,
    team: *const FfiTeamInput,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || id.is_null() || team.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let id = unsafe { read_c_str(id) };
        let team = unsafe { (*team).to_core() };
        match client.inner.build_update_team(&id, &team) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for deleting a team by id.
///
/// Returns null if `client` or `id` is null, or if `id` is blank.
#[unsafe(no_mangle)]
pub extern "C" fn teams_build_delete_team(
    client: *const FfiTeamsClient,
    id: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || id.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let id = unsafe { read_c_str(id) };
        match client.inner.build_delete_team(&id) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null body reads
/// as empty.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body: unsafe { read_c_str(resp.body) },
    }
}

/// Shared null checks and conversion for every `teams_parse_*` entry point.
fn parse_with<F>(
    client: *const FfiTeamsClient,
    response: *const FfiHttpResponse,
    name: &str,
    parse: F,
) -> *mut FfiTeamsResult
where
    F: FnOnce(&teams_core::TeamsClient, HttpResponse) -> *mut FfiTeamsResult
        + std::panic::UnwindSafe,
{
    catch_unwind(|| {
        if client.is_null() {
            return FfiTeamsResult::null_arg("client");
        }
        if response.is_null() {
            return FfiTeamsResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        parse(&client.inner, ffi_response_to_core(resp))
    })
    .unwrap_or_else(|_| FfiTeamsResult::panic(&format!("panic in {name}")))
}

/// Parse an HTTP response from a list-teams request.
///
/// Returns a result with `data_tag = TeamList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn teams_parse_list_teams(
    client: *const FfiTeamsClient,
    response: *const FfiHttpResponse,
) -> *mut FfiTeamsResult {
    parse_with(client, response, "teams_parse_list_teams", |c, resp| {
        match c.parse_list_teams(resp) {
            Ok(teams) => FfiTeamsResult::ok_team_list(teams),
            Err(e) => FfiTeamsResult::from_error(e),
        }
    })
}

/// Parse an HTTP response from a get-team request.
///
/// Returns `data_tag = Team` on success and `error_code = NotFound` when the
/// server answered 404.
#[unsafe(no_mangle)]
pub extern "C" fn teams_parse_get_team(
    client: *const FfiTeamsClient,
    response: *const FfiHttpResponse,
) -> *mut FfiTeamsResult {
    parse_with(client, response, "teams_parse_get_team", |c, resp| {
        match c.parse_get_team(resp) {
            Ok(Some(team)) => FfiTeamsResult::ok_team(team),
            Ok(None) => FfiTeamsResult::from_error(teams_core::ApiError::NotFound),
            Err(e) => FfiTeamsResult::from_error(e),
        }
    })
}

/// Parse an HTTP response from a create-team request. Any 2xx is success
/// and the body is ignored.
#[unsafe(no_mangle)]
pub extern "C" fn teams_parse_create_team(
    client: *const FfiTeamsClient,
    response: *const FfiHttpResponse,
) -> *mut FfiTeamsResult {
    parse_with(client, response, "teams_parse_create_team", |c, resp| {
        match c.parse_create_team(resp) {
            Ok(()) => FfiTeamsResult::ok_empty(),
            Err(e) => FfiTeamsResult::from_error(e),
        }
    })
}

/// Parse an HTTP response from an update-team request.
#[unsafe(no_mangle)]
pub extern "C" fn teams_parse_update_team(
    client: *const FfiTeamsClient,
    response: *const FfiHttpResponse,
) -> *mut FfiTeamsResult {
    parse_with(client, response, "teams_parse_update_team", |c, resp| {
        match c.parse_update_team(resp) {
            Ok(()) => FfiTeamsResult::ok_empty(),
            Err(e) => FfiTeamsResult::from_error(e),
        }
    })
}

/// Parse an HTTP response from a delete-team request.
#[unsafe(no_mangle)]
pub extern "C" fn teams_parse_delete_team(
    client: *const FfiTeamsClient,
    response: *const FfiHttpResponse,
) -> *mut FfiTeamsResult {
    parse_with(client, response, "teams_parse_delete_team", |c, resp| {
        match c.parse_delete_team(resp) {
            Ok(()) => FfiTeamsResult::ok_empty(),
            Err(e) => FfiTeamsResult::from_error(e),
        }
    })
}

// ---------------------------------------------------------------------------
// Id assignment
// ---------------------------------------------------------------------------

/// Next sequential id for a team added to `list` (as returned by
/// `teams_parse_list_teams`). A null list counts as empty.
/// Free the returned string with `teams_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn teams_next_id(list: *const FfiTeamList) -> *mut c_char {
    catch_unwind(|| {
        let teams = if list.is_null() {
            Vec::new()
        } else {
            let list = unsafe { &*list };
            if list.items.is_null() || list.len == 0 {
                Vec::new()
            } else {
                let items = unsafe { std::slice::from_raw_parts(list.items, list.len as usize) };
                items.iter().map(|item| unsafe { item.to_core() }).collect()
            }
        };
        to_c_string(teams_core::ids::next_sequential_id(&teams))
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by any `teams_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn teams_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        if !req.path.is_null() {
            drop(unsafe { CString::from_raw(req.path) });
        }
        if !req.body.is_null() {
            drop(unsafe { CString::from_raw(req.body) });
        }
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    req.headers,
                    req.headers_len as usize,
                ))
            };
            for h in headers.iter() {
                if !h.key.is_null() {
                    drop(unsafe { CString::from_raw(h.key) });
                }
                if !h.value.is_null() {
                    drop(unsafe { CString::from_raw(h.value) });
                }
            }
        }
    });
}

/// Free an `FfiTeamsResult` returned by any `teams_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn teams_free_result(result: *mut FfiTeamsResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.data.is_null() {
            match result.data_tag {
                FfiDataTag::Team => {
                    let team = unsafe { Box::from_raw(result.data as *mut FfiTeam) };
                    free_ffi_team_fields(&team);
                }
                FfiDataTag::TeamList => {
                    let list = unsafe { Box::from_raw(result.data as *mut FfiTeamList) };
                    if !list.items.is_null() && list.len > 0 {
                        let items = unsafe {
                            Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                                list.items,
                                list.len as usize,
                            ))
                        };
                        for item in items.iter() {
                            free_ffi_team_fields(item);
                        }
                    }
                }
                FfiDataTag::None => {}
            }
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn teams_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
