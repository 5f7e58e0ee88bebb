//! KDLパーサー
//!
//! CourtflowのFlow定義ファイル（KDL）をパースします。
//! 各ノードタイプのパース処理はモジュールに分離されています。

mod flow;
mod step;

use flow::parse_flow;

use crate::error::Result;
use crate::model::Flow;
use kdl::{KdlDocument, KdlNode};

/// KDL文字列をパースしてFlowのリストを生成
///
/// トップレベルの `flow "slug" { ... }` ノードを宣言順に読み取ります。
/// 不明なトップレベルノードはスキップします。
pub fn parse_flows_str(content: &str) -> Result<Vec<Flow>> {
    let doc: KdlDocument = content.parse()?;

    let mut flows = Vec::new();
    for node in doc.nodes() {
        match node.name().value() {
            "flow" => flows.push(parse_flow(node)?),
            _ => {
                // 不明なノードはスキップ（コメント用のメタノードなどを許可）
            }
        }
    }

    Ok(flows)
}

/// ノードの最初の引数を文字列として取得
pub(super) fn first_string(node: &KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}

/// ノードの名前付きプロパティを文字列として取得
pub(super) fn string_prop(node: &KdlNode, key: &str) -> Option<String> {
    node.entries()
        .iter()
        .find(|e| e.name().map(|n| n.value()) == Some(key))
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests;
