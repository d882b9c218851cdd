//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use teams_core::error::ApiError;
use teams_core::http::HttpMethod;
use teams_core::Team;

/// Opaque handle to a `TeamsClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiTeamsClient {
    pub(crate) inner: teams_core::TeamsClient,
}

/// Copy `s` into a heap C string owned by the caller. Interior NULs are
/// removed rather than failing the whole call; `FfiTeam` documents this for C.
pub(crate) fn to_c_string(s: String) -> *mut c_char {
    let s = if s.contains('\0') { s.replace('\0', "") } else { s };
    CString::new(s).unwrap_or_default().into_raw()
}

/// Read a caller-owned C string; null and invalid UTF-8 read as empty.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string.
pub(crate) unsafe fn read_c_str(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .unwrap_or("")
        .to_string()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
            HttpMethod::Put => FfiHttpMethod::Put,
            HttpMethod::Delete => FfiHttpMethod::Delete,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `teams_build_*` functions. The C caller executes the request
/// and passes the response back through `teams_parse_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: teams_core::HttpRequest) -> *mut Self {
        let path = to_c_string(req.path);
        let body = match req.body {
            Some(b) => to_c_string(b),
            None => std::ptr::null_mut(),
        };

        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            // Boxed slice so capacity == len when rebuilt in `teams_free_request`.
            let ffi_headers: Box<[FfiHeader]> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: to_c_string(k),
                    value: to_c_string(v),
                })
                .collect();
            Box::into_raw(ffi_headers) as *mut FfiHeader
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            path,
            headers,
            headers_len,
            body,
        }))
    }
}

// ---------------------------------------------------------------------------
// Caller-provided inputs (read, never freed by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing an HTTP request,
/// then passes a pointer to a `teams_parse_*` function.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

/// A full team record supplied by the caller for create and update.
/// Null string fields read as empty strings.
#[repr(C)]
pub struct FfiTeamInput {
    pub id: *const c_char,
    pub name: *const c_char,
    pub description: *const c_char,
    pub points: i64,
    pub goals: i64,
    pub logo: *const c_char,
}

impl FfiTeamInput {
    /// # Safety
    /// Every non-null string field must point to a NUL-terminated string.
    pub(crate) unsafe fn to_core(&self) -> Team {
        unsafe {
            Team {
                id: read_c_str(self.id),
                name: read_c_str(self.name),
                description: read_c_str(self.description),
                points: self.points,
                goals: self.goals,
                logo: read_c_str(self.logo),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiTeamsResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    NotFound = 1,
    Http = 2,
    Deserialization = 3,
    Serialization = 4,
    Panic = 5,
    NullArg = 6,
    Transport = 7,
    InvalidUrl = 8,
    Validation = 9,
}

/// Tag that tells `teams_free_result` what `FfiTeamsResult::data` points to.
#[repr(C)]
pub enum FfiDataTag {
    None = 0,
    Team = 1,
    TeamList = 2,
}

/// A single team exposed to C.
///
/// String fields are NUL-terminated copies of the server's values. A NUL
/// byte inside a value cannot be represented and is removed, so such a
/// field differs from what the server sent.
#[repr(C)]
pub struct FfiTeam {
    pub id: *mut c_char,
    pub name: *mut c_char,
    pub description: *mut c_char,
    pub points: i64,
    pub goals: i64,
    pub logo: *mut c_char,
}

impl FfiTeam {
    fn from_core(team: Team) -> Self {
        FfiTeam {
            id: to_c_string(team.id),
            name: to_c_string(team.name),
            description: to_c_string(team.description),
            points: team.points,
            goals: team.goals,
            logo: to_c_string(team.logo),
        }
    }

    /// Read the C fields back into a core `Team`.
    ///
    /// # Safety
    /// String fields must be null or valid NUL-terminated strings.
    pub(crate) unsafe fn to_core(&self) -> Team {
        unsafe {
            Team {
                id: read_c_str(self.id),
                name: read_c_str(self.name),
                description: read_c_str(self.description),
                points: self.points,
                goals: self.goals,
                logo: read_c_str(self.logo),
            }
        }
    }
}

/// A list of teams exposed to C.
#[repr(C)]
pub struct FfiTeamList {
    pub items: *mut FfiTeam,
    pub len: u32,
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the parsed payload (tagged by `data_tag`).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, and `data` is null.
#[repr(C)]
pub struct FfiTeamsResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiTeamsResult {
    fn boxed(
        error_code: FfiErrorCode,
        error_message: *mut c_char,
        http_status: u16,
        data_tag: FfiDataTag,
        data: *mut std::ffi::c_void,
    ) -> *mut Self {
        Box::into_raw(Box::new(FfiTeamsResult {
            error_code,
            error_message,
            http_status,
            data_tag,
            data,
        }))
    }

    /// Build a success result carrying a single `FfiTeam`.
    pub(crate) fn ok_team(team: Team) -> *mut Self {
        let ffi_team = Box::new(FfiTeam::from_core(team));
        Self::boxed(
            FfiErrorCode::Ok,
            std::ptr::null_mut(),
            0,
            FfiDataTag::Team,
            Box::into_raw(ffi_team) as *mut std::ffi::c_void,
        )
    }

    /// Build a success result carrying a `FfiTeamList`.
    pub(crate) fn ok_team_list(teams: Vec<Team>) -> *mut Self {
        let len = teams.len() as u32;
        let items = if teams.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_teams: Box<[FfiTeam]> = teams.into_iter().map(FfiTeam::from_core).collect();
            Box::into_raw(ffi_teams) as *mut FfiTeam
        };

        let ffi_list = Box::new(FfiTeamList { items, len });
        Self::boxed(
            FfiErrorCode::Ok,
            std::ptr::null_mut(),
            0,
            FfiDataTag::TeamList,
            Box::into_raw(ffi_list) as *mut std::ffi::c_void,
        )
    }

    /// Build a success result with no data payload (create, update, delete).
    pub(crate) fn ok_empty() -> *mut Self {
        Self::boxed(
            FfiErrorCode::Ok,
            std::ptr::null_mut(),
            0,
            FfiDataTag::None,
            std::ptr::null_mut(),
        )
    }

    /// Build an error result from an `ApiError`.
    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        let code = match &err {
            ApiError::NotFound => FfiErrorCode::NotFound,
            ApiError::HttpError { .. } => FfiErrorCode::Http,
            ApiError::Transport(_) => FfiErrorCode::Transport,
            ApiError::DeserializationError(_) => FfiErrorCode::Deserialization,
            ApiError::SerializationError(_) => FfiErrorCode::Serialization,
            ApiError::InvalidUrl(_) => FfiErrorCode::InvalidUrl,
            ApiError::Validation(_) => FfiErrorCode::Validation,
        };
        let http_status = err.status().unwrap_or(0);
        Self::boxed(
            code,
            to_c_string(err.to_string()),
            http_status,
            FfiDataTag::None,
            std::ptr::null_mut(),
        )
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::boxed(
            FfiErrorCode::NullArg,
            to_c_string(format!("null argument: {name}")),
            0,
            FfiDataTag::None,
            std::ptr::null_mut(),
        )
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::boxed(
            FfiErrorCode::Panic,
            to_c_string(msg.to_string()),
            0,
            FfiDataTag::None,
            std::ptr::null_mut(),
        )
    }
}

/// Free the C-string fields of an `FfiTeam` (but not the struct itself).
pub(crate) fn free_ffi_team_fields(team: &FfiTeam) {
    for ptr in [team.id, team.name, team.description, team.logo] {
        if !ptr.is_null() {
            drop(unsafe { CString::from_raw(ptr) });
        }
    }
}
