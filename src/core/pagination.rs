#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub counts: u32,
    pub page: u32,
    pub page_count: u32,
    pub page_size: u32,
    pub results: Vec<T>,
}

pub fn page_count(total: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

// (page, page_size, offset) with page and page_size at least 1
pub fn page_window(page: u32, page_size: u32) -> (u32, u32, u32) {
    let page = page.max(1);
    let page_size = page_size.max(1);
    (page, page_size, (page - 1).saturating_mul(page_size))
}
