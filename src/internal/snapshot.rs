//! 仓库快照下载：列出快照中的全部文件，逐个下载到目标目录（完整拷贝或链接到共享缓存）。

pub mod structs;
