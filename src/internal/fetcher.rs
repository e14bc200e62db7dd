//! 快照获取入口：确保目标目录存在，委托传输协作者下载整个仓库快照，并给出终态结果。

pub mod structs;
pub mod traits;
