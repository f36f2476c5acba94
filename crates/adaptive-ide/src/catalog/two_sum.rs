//! The built-in "Two Sum" problem served when no other problem is requested.

use std::collections::BTreeMap;

use crate::catalog::{Difficulty, Example, Problem, TestCase};

pub const TWO_SUM_ID: &str = "two-sum";

const TEST_COUNT: usize = 20;

const PYTHON: &str = "def two_sum(nums, target):
    # TODO: implement
    return [0,1]
";

const JAVASCRIPT: &str = "function twoSum(nums, target) {
  // TODO
  return [0,1];
}
module.exports = twoSum;
";

const TYPESCRIPT: &str = "export function twoSum(nums: number[], target: number): [number, number] {
  // TODO
  return [0,1];
}
";

const JAVA: &str = "import java.util.*;
class Solution {
  public int[] twoSum(int[] nums, int target){
    // TODO
    return new int[]{0,1};
  }
}
";

const C: &str = "#include <stdio.h>
int main(){return 0;}
";

const CPP: &str = "#include <bits/stdc++.h>
using namespace std;
int main(){return 0;}
";

const GO: &str = "package main
import \"fmt\"
func twoSum(nums []int, target int) []int {
  // TODO
  return []int{0,1}
}
func main(){fmt.Println(\"ok\")}
";

pub fn two_sum() -> Problem {
    let function_signature = [
        ("python", PYTHON),
        ("javascript", JAVASCRIPT),
        ("typescript", TYPESCRIPT),
        ("java", JAVA),
        ("c", C),
        ("cpp", CPP),
        ("go", GO),
    ]
    .into_iter()
    .map(|(lang, template)| (lang.to_owned(), template.to_owned()))
    .collect();

    let time_limits: BTreeMap<String, u64> = [
        ("python", 2000),
        ("javascript", 2000),
        ("typescript", 2000),
        ("java", 3000),
        ("c", 1500),
        ("cpp", 1500),
        ("go", 1500),
    ]
    .into_iter()
    .map(|(lang, ms)| (lang.to_owned(), ms))
    .collect();

    Problem {
        id: TWO_SUM_ID.to_owned(),
        title: "Two Sum".to_owned(),
        statement: "Given an array of integers and a target, return indices of two numbers \
                    adding to target (unique solution)."
            .to_owned(),
        function_signature,
        constraints: vec![
            "2 ≤ n ≤ 2e5".to_owned(),
            "-1e9 ≤ nums[i], target ≤ 1e9".to_owned(),
            "Exactly one valid answer".to_owned(),
        ],
        examples: vec![
            Example {
                input: "[2,7,11,15], 9".to_owned(),
                output: "[0,1]".to_owned(),
                explain: Some("2 + 7 = 9".to_owned()),
            },
            Example {
                input: "[3,2,4], 6".to_owned(),
                output: "[1,2]".to_owned(),
                explain: None,
            },
        ],
        tests: (0..TEST_COUNT).map(test_case).collect(),
        time_limits,
        memory_mb: Some(256),
        approach_hint: Some("Try checking complement before storing the current element.".to_owned()),
    }
}

fn test_case(index: usize) -> TestCase {
    let difficulty = match index {
        0..=6 => Difficulty::Low,
        7..=13 => Difficulty::Med,
        _ => Difficulty::High,
    };
    TestCase {
        id: format!("T{:02}", index + 1),
        difficulty,
        input: r#"{"nums":[2,7,11,15],"target":9}"#.to_owned(),
        expected: "[0,1]".to_owned(),
        timeout_ms: Some(if index < 14 { 1500 } else { 2500 }),
    }
}
