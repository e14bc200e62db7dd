/// 单次下载的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadResult {
    /// 本地文件已完整，未发起传输
    AlreadyComplete,
    /// 已保存到本地文件
    Saved {
        /// 续传起点（字节），从零开始下载时为 0
        resumed_from: u64,
        /// 本次实际写入的字节数
        bytes_written: u64,
    },
}

impl DownloadResult {
    /// 本次写入的字节数；跳过时为 0。
    pub fn bytes_written(&self) -> u64 {
        match self {
            DownloadResult::AlreadyComplete => 0,
            DownloadResult::Saved { bytes_written, .. } => *bytes_written,
        }
    }
}
