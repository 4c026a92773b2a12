//! Built-in enrichment catalog: the five default categories, their task
//! pool, and the hand-tuned offsets for the built-in subcategory labels.

use crate::model::{Category, Task};

fn category(id: &str, name: &str, color: &str, icon: &str, x: f64, y: f64) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
        x,
        y,
    }
}

pub fn default_categories() -> Vec<Category> {
    vec![
        category("cognitive", "认知丰容", "#FFF59D", "🧠", 50.0, 28.0),
        category("sensory", "感知丰容", "#90CAF9", "🎨", 30.0, 45.0),
        category("physical", "物理环境", "#A5D6A7", "🏠", 70.0, 45.0),
        category("food", "食物丰容", "#F48FB1", "🍓", 38.0, 68.0),
        category("social", "社群丰容", "#CE93D8", "🤝", 62.0, 68.0),
    ]
}

/// Hand-placed offsets (percentage space, relative to the parent category)
/// for the built-in subcategory labels. Unknown labels fall back to the
/// deterministic hash offset in `layout`.
pub fn builtin_subcat_offset(label: &str) -> Option<(f64, f64)> {
    let off = match label {
        // 感知
        "触觉" => (-10.0, -4.0),
        "视觉" => (-8.0, 6.0),
        "听觉" => (-4.0, 10.0),
        "嗅觉/味觉" => (6.0, 8.0),
        // 物理
        "家/我的小窝" => (10.0, -4.0),
        "生活功能拓展" => (8.0, 6.0),
        "独处的专属角" => (12.0, 2.0),
        "环境/气候场景" => (4.0, 10.0),
        // 认知
        "尝试全新活动" => (-8.0, -6.0),
        "日常脑力锻炼" => (8.0, -6.0),
        // 食物
        "新奇食物" => (-8.0, 8.0),
        "烹饪与环境" => (8.0, 8.0),
        // 社群
        "同类群体" => (-8.0, 8.0),
        "短暂交集" => (8.0, 8.0),
        "跨物种互动" => (0.0, 12.0),
        "老己" => (10.0, -2.0),
        _ => return None,
    };
    Some(off)
}

fn task(id: &str, category: &str, sub: &str, content: &str) -> Task {
    Task {
        id: id.to_string(),
        category: category.to_string(),
        sub_category: sub.to_string(),
        content: content.to_string(),
        is_custom: false,
    }
}

pub fn initial_tasks() -> Vec<Task> {
    vec![
        // 1. 感知丰容
        task("s1", "sensory", "触觉", "尝试 DIY 陶艺，感受不同粘土材质"),
        task("s2", "sensory", "触觉", "去大自然中拥抱一棵大树，触摸天然材质"),
        task("s3", "sensory", "触觉", "撸猫撸狗，感受毛茸茸的治愈"),
        task("s4", "sensory", "触觉", "触摸不同表面的物品（如羊毛毯、金属工艺品等）"),
        task("s5", "sensory", "视觉", "看一场电影或纪录片"),
        task("s6", "sensory", "视觉", "去逛线下画展或摄影展"),
        task("s7", "sensory", "视觉", "观察不同的城市建筑、街头人文"),
        task("s8", "sensory", "视觉", "捕捉大自然或城市夜景的风光"),
        task("s9", "sensory", "听觉", "探索一种从未听过的音乐类型"),
        task("s10", "sensory", "听觉", "去户外听雨声、鸟鸣或树叶沙沙声"),
        task("s11", "sensory", "听觉", "听一期有趣的播客或听书"),
        task("s12", "sensory", "嗅觉/味觉", "品鉴一杯高品质的咖啡、茶或红酒"),
        task("s13", "sensory", "嗅觉/味觉", "闻一闻香氛、精油或香薰"),
        task("s14", "sensory", "嗅觉/味觉", "感受大自然的气味（如雨后泥土、桂花香）"),
        task("s15", "sensory", "嗅觉/味觉", "尝试一种从未吃过的美食"),
        // 2. 物理环境丰容
        task("p1", "physical", "家/我的小窝", "调整优化家具布局，换个心情"),
        task("p2", "physical", "家/我的小窝", "给家里添置挂画、绿植等软装，保持新鲜感"),
        task("p3", "physical", "家/我的小窝", "进行一次深度断舍离或日常维护清洁"),
        task("p4", "physical", "生活功能拓展", "在家里布置一个专属健身角或书架"),
        task("p5", "physical", "生活功能拓展", "在阳台搭建一个花架，满足绿植需求"),
        task("p6", "physical", "生活功能拓展", "布置一张拼图桌或积木书桌"),
        task("p7", "physical", "独处的专属角", "在角落创造一个独处的专属空间"),
        task("p8", "physical", "独处的专属角", "给自己 15 分钟的“空白页”时间，什么都不做"),
        task("p9", "physical", "环境/气候场景", "去体验四季：春季野餐、夏季水上、秋季观景、冬季滑雪"),
        task("p10", "physical", "环境/气候场景", "在特殊环境下放松：去海边、森林或村庄"),
        task("p11", "physical", "环境/气候场景", "感受不同的天气：雨天赏雨、晴天晒太阳、微风放风筝"),
        // 3. 认知丰容
        task("c1", "cognitive", "尝试全新活动", "体验一种新的生活方式（如旅居、极简生活）"),
        task("c2", "cognitive", "尝试全新活动", "学习一项新技能（如潜水、编程、乐器）"),
        task("c3", "cognitive", "尝试全新活动", "来一场说走就走的旅行，去往未知场景"),
        task("c4", "cognitive", "尝试全新活动", "参加一类从未体验过的团购体验课"),
        task("c5", "cognitive", "日常脑力锻炼", "进行深度阅读或跨学科学习"),
        task("c6", "cognitive", "日常脑力锻炼", "玩一局逻辑类游戏"),
        task("c7", "cognitive", "日常脑力锻炼", "做一次思维训练或复盘笔记"),
        task("c8", "cognitive", "日常脑力锻炼", "学习一句新的外语"),
        task("c9", "cognitive", "日常脑力锻炼", "尝试用非惯用手刷牙，或走一条上班的新路线"),
        // 4. 食物丰容
        task("f1", "food", "新奇食物", "去吃一个从未去过国家/地区的特色美食"),
        task("f2", "food", "新奇食物", "尝试一种从未见过的食材或小众水果"),
        task("f3", "food", "新奇食物", "去便利店买一款口味最奇怪的零食"),
        task("f4", "food", "烹饪与环境", "亲手制作一种食材（如手作果酱、泡菜）"),
        task("f5", "food", "烹饪与环境", "去父母或朋友家“蹭饭”，感受不同的家庭味道"),
        task("f6", "food", "烹饪与环境", "布置一个漂亮的餐桌环境，增加用餐仪式感"),
        task("f7", "food", "烹饪与环境", "尝试一种新的饮食方式（如地中海饮食、间歇性饮食）"),
        // 5. 社群丰容
        task("sc1", "social", "同类群体", "找老朋友聊天、小聚"),
        task("sc2", "social", "同类群体", "和家人团聚，享受亲情时光"),
        task("sc3", "social", "同类群体", "参加同好间的活动（如徒步团、研讨社）"),
        task("sc4", "social", "同类群体", "与不同年龄段的人交流"),
        task("sc5", "social", "短暂交集", "与咖啡店店员、快递员或社区工作者简短聊聊天"),
        task("sc6", "social", "短暂交集", "在公园闲聊，或参加一日志愿者活动"),
        task("sc7", "social", "短暂交集", "给远方的朋友写一封信（笔友模式）"),
        task("sc8", "social", "跨物种互动", "观察并照料家里的宠物"),
        task("sc9", "social", "跨物种互动", "去户外观察野鸟或照顾流浪动物"),
        task("sc10", "social", "跨物种互动", "给家里的绿植浇水、修剪"),
        task("sc11", "social", "老己", "做自己的“饲养员”：保证规律作息和健身"),
        task("sc12", "social", "老己", "进行一次心理调节或理财学习"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_task_references_a_builtin_category() {
        let cats = default_categories();
        for t in initial_tasks() {
            assert!(
                cats.iter().any(|c| c.id == t.category),
                "task {} references unknown category {}",
                t.id,
                t.category
            );
        }
    }

    #[test]
    fn every_builtin_subcategory_has_a_hand_placed_offset() {
        for t in initial_tasks() {
            assert!(
                builtin_subcat_offset(&t.sub_category).is_some(),
                "no offset for {}",
                t.sub_category
            );
        }
    }
}
