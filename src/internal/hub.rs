//! 模型仓库（Hub）访问：仓库元数据读取，以及将元数据转换为领域模型。

pub mod enums;
pub mod error;
pub mod functions;
pub mod raw_json;
