//! 期望记录与现有记录的对比
//!
//! 匹配键只有 (type, name)，精确且区分大小写；同一键有多条现有记录时取第一条。
//! 对比只针对操作开始时取到的快照，输入中重复的键不会互相影响。

use crate::types::Record;

use super::DnsMadeEasyRecord;

/// 在快照中查找第一条 (type, name) 相同的记录
pub(crate) fn find_existing<'a>(
    existing: &'a [DnsMadeEasyRecord],
    record: &Record,
) -> Option<&'a DnsMadeEasyRecord> {
    existing.iter().find(|r| r.matches(record))
}

/// Append 计划
#[derive(Debug, Default)]
pub(crate) struct AppendPlan {
    /// 待创建（不带 ID）
    pub to_create: Vec<DnsMadeEasyRecord>,
    /// 与 `to_create` 一一对应的输入记录，保持输入顺序
    pub appended: Vec<Record>,
}

/// 只创建快照中不存在的记录，已存在的跳过
pub(crate) fn plan_append(existing: &[DnsMadeEasyRecord], desired: &[Record]) -> AppendPlan {
    let mut plan = AppendPlan::default();
    for record in desired {
        if find_existing(existing, record).is_none() {
            plan.to_create.push(DnsMadeEasyRecord::from_record(record));
            plan.appended.push(record.clone());
        }
    }
    plan
}

/// Set 计划
#[derive(Debug, Default)]
pub(crate) struct SetPlan {
    /// 快照中不存在，待创建
    pub to_create: Vec<DnsMadeEasyRecord>,
    /// 快照中已存在，带现有 ID 待更新
    pub to_update: Vec<DnsMadeEasyRecord>,
    /// 与 `to_update` 一一对应的输入记录，保持输入顺序
    pub updated: Vec<Record>,
}

/// 不存在则创建，存在则用期望值覆盖（保留现有 ID）
pub(crate) fn plan_set(existing: &[DnsMadeEasyRecord], desired: &[Record]) -> SetPlan {
    let mut plan = SetPlan::default();
    for record in desired {
        match find_existing(existing, record) {
            None => plan.to_create.push(DnsMadeEasyRecord::from_record(record)),
            Some(current) => {
                plan.to_update
                    .push(DnsMadeEasyRecord::from_record(record).with_id(current.id));
                plan.updated.push(record.clone());
            }
        }
    }
    plan
}

/// 收集快照中匹配记录的 ID，不存在的跳过
pub(crate) fn plan_delete(existing: &[DnsMadeEasyRecord], desired: &[Record]) -> Vec<u64> {
    desired
        .iter()
        .filter_map(|record| find_existing(existing, record).map(|r| r.id))
        .collect()
}
