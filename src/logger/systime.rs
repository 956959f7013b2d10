use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current local time in the format YYYY-MM-DD HH:MM:SS TZ
#[cfg(target_family = "unix")]
pub fn now() -> String {
    use std::ffi::{CStr, CString};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards");
    let secs = now.as_secs() as libc::time_t;

    let mut tm: libc::tm = unsafe { std::mem::zeroed() };

    unsafe {
        libc::localtime_r(&secs, &mut tm);
    }

    let mut buf = [0 as libc::c_char; 100];
    let fmt = CString::new("%Y-%m-%d %H:%M:%S %Z").unwrap();

    unsafe {
        libc::strftime(buf.as_mut_ptr(), buf.len(), fmt.as_ptr(), &tm);
        let c_str = CStr::from_ptr(buf.as_ptr());

        c_str.to_string_lossy().to_string()
    }
}

/// Returns the current local time in the format YYYY-MM-DD HH:MM:SS
#[cfg(target_family = "windows")]
pub fn now() -> String {
    let mut tm: windows_sys::Win32::Foundation::SYSTEMTIME = unsafe { std::mem::zeroed() };

    unsafe {
        windows_sys::Win32::System::SystemInformation::GetLocalTime(&mut tm);
    }

    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        tm.wYear, tm.wMonth, tm.wDay, tm.wHour, tm.wMinute, tm.wSecond
    )
}

/// Returns the current Unix timestamp in seconds
pub fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs() as i64
}
