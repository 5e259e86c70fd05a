//! 静态内容：报告向导题库、比赛类别、申请指南、研究工具和教师快捷评价

pub mod feedback;
pub mod info;
pub mod wizard;
