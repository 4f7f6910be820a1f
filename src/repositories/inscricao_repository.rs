use crate::models::inscricao::Inscricao;
use crate::utils::errors::AppResult;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct InscricaoRepository {
    pool: PgPool,
}

impl InscricaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        empresa_id: Uuid,
        cidadao_id: Uuid,
        acao_id: Uuid,
        oferta_id: Uuid,
        curso_exame_id: Uuid,
        data_inscricao: NaiveDate,
    ) -> AppResult<Inscricao> {
        let inscricao = sqlx::query_as::<_, Inscricao>(
            r#"
            INSERT INTO inscricoes (id, empresa_id, cidadao_id, acao_id, oferta_id,
                                    curso_exame_id, status, data_inscricao, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'pending', $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(empresa_id)
        .bind(cidadao_id)
        .bind(acao_id)
        .bind(oferta_id)
        .bind(curso_exame_id)
        .bind(data_inscricao)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(inscricao)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Inscricao>> {
        let inscricao = sqlx::query_as::<_, Inscricao>("SELECT * FROM inscricoes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(inscricao)
    }

    pub async fn find_by_acao(&self, acao_id: Uuid) -> AppResult<Vec<Inscricao>> {
        let inscricoes = sqlx::query_as::<_, Inscricao>(
            "SELECT * FROM inscricoes WHERE acao_id = $1 ORDER BY created_at DESC",
        )
        .bind(acao_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(inscricoes)
    }

    pub async fn find_by_cidadao(&self, cidadao_id: Uuid) -> AppResult<Vec<Inscricao>> {
        let inscricoes = sqlx::query_as::<_, Inscricao>(
            "SELECT * FROM inscricoes WHERE cidadao_id = $1 ORDER BY data_inscricao DESC",
        )
        .bind(cidadao_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(inscricoes)
    }

    /// Inscrição ativa mais recente do cidadão no mesmo curso/exame,
    /// em QUALQUER ação. É o insumo do checador de elegibilidade.
    pub async fn find_ultima_ativa(
        &self,
        cidadao_id: Uuid,
        curso_exame_id: Uuid,
    ) -> AppResult<Option<Inscricao>> {
        let inscricao = sqlx::query_as::<_, Inscricao>(
            r#"
            SELECT * FROM inscricoes
            WHERE cidadao_id = $1 AND curso_exame_id = $2
              AND status IN ('pending', 'attended')
            ORDER BY data_inscricao DESC, created_at DESC
            LIMIT 1
            "#,
        )
        .bind(cidadao_id)
        .bind(curso_exame_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(inscricao)
    }

    /// Inscrições que ocupam vaga na oferta (pending + attended).
    pub async fn count_ativas_por_oferta(&self, oferta_id: Uuid) -> AppResult<i64> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM inscricoes
            WHERE oferta_id = $1 AND status IN ('pending', 'attended')
            "#,
        )
        .bind(oferta_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> AppResult<Inscricao> {
        let inscricao = sqlx::query_as::<_, Inscricao>(
            r#"
            UPDATE inscricoes SET status = $2 WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(inscricao)
    }
}
