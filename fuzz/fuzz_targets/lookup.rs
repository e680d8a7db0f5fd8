#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&[u8], &str, bool)| {
    let (source, path, strip_comments) = data;
    if let Ok(document) = jpath::options()
        .strip_comments(strip_comments)
        .parse_from_slice(source)
    {
        let _ = document.get_key_object_by_path(path);
        let _ = document.get_key_string_by_path(path);
    }
});
