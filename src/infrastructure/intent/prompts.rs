//! Localized prompts for intent analysis

use crate::domain::Language;

const SYSTEM_PROMPT_EN: &str = r#"You are an intent analysis expert for the Dify Workflow DSL Generator.
Analyze the user input to determine the appropriate workflow configuration.
Return a JSON object with the following information:

1. workflow_name: The name of the workflow
2. description: A description of the workflow
3. node_types: A list of node types to include in the workflow (select from the following)
   - start (required)
   - end (required)
   - llm (language model)
   - knowledge-retrieval (knowledge retrieval)
   - http-request (HTTP request)
   - code (code execution)
   - template-transform (template transformation)
   - answer (answer)
   - if-else (conditional)
   - iteration (loop)
4. variables: A list of variables for the workflow (each with a name, type, and whether it's required)

Analyze the user's intent and determine the most appropriate workflow configuration.
Always return your response in JSON format."#;

const SYSTEM_PROMPT_JA: &str = r#"あなたはDifyワークフローDSLジェネレーターのインテント分析エキスパートです。
ユーザーの入力を分析し、適切なワークフロー設定を決定します。
以下の情報を含むJSONオブジェクトを返してください：

1. workflow_name: ワークフローの名前
2. description: ワークフローの説明
3. node_types: ワークフローに含めるノードタイプのリスト（以下から選択）
   - start（必須）
   - end（必須）
   - llm（言語モデル）
   - knowledge-retrieval（知識検索）
   - http-request（HTTPリクエスト）
   - code（コード実行）
   - template-transform（テンプレート変換）
   - answer（回答）
   - if-else（条件分岐）
   - iteration（繰り返し）
4. variables: ワークフローの変数のリスト（各変数は名前、タイプ、必須かどうかを含む）

ユーザーの意図を分析し、最も適切なワークフロー設定を決定してください。
回答は必ずJSON形式で返してください。"#;

const USER_PROMPT_EN: &str = r#"Analyze the following user input and determine the appropriate Dify workflow configuration:

User Input: ${user_input}

Return your response in the following JSON format:

{
  "workflow_name": "Workflow Name",
  "description": "Workflow Description",
  "node_types": ["List of required node types"],
  "variables": [
    {
      "name": "Variable Name",
      "type": "string/number/boolean/file",
      "required": true/false
    }
  ]
}

Provide the workflow configuration that best matches the user's intent."#;

const USER_PROMPT_JA: &str = r#"以下のユーザー入力を分析し、適切なDifyワークフロー設定を決定してください：

ユーザー入力: ${user_input}

以下の形式でJSON応答を返してください：

{
  "workflow_name": "ワークフロー名",
  "description": "ワークフローの説明",
  "node_types": ["必要なノードタイプのリスト"],
  "variables": [
    {
      "name": "変数名",
      "type": "string/number/boolean/file",
      "required": true/false
    }
  ]
}

ユーザーの意図に最も適したワークフロー設定を提供してください。"#;

pub fn system_prompt(language: Language) -> &'static str {
    language.pick(SYSTEM_PROMPT_EN, SYSTEM_PROMPT_JA)
}

pub fn user_prompt(user_input: &str, language: Language) -> String {
    language
        .pick(USER_PROMPT_EN, USER_PROMPT_JA)
        .replace("${user_input}", user_input)
}
