pub fn blog_dir() -> String {
    "blog".to_string()
}

pub fn blog_first() -> u32 {
    14
}

pub fn blog_last() -> u32 {
    30
}

pub fn zapasy_dir() -> String {
    "zapasy".to_string()
}

pub fn extension() -> String {
    "html".to_string()
}
